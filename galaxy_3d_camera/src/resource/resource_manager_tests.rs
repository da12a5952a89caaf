/// Tests for ResourceManager
///
/// These tests validate camera resource creation, retrieval, removal,
/// reload, and reload notifications.

use super::*;
use std::sync::Mutex;
use crate::error::Error;

fn desc(fov: f32) -> CameraResourceDesc {
    CameraResourceDesc {
        fov,
        near_z: 0.1,
        far_z: 100.0,
        aspect_ratio: 1.0,
        auto_aspect_ratio: false,
    }
}

// ============================================================================
// Tests: Create
// ============================================================================

#[test]
fn test_resource_manager_new() {
    let rm = ResourceManager::new();
    assert_eq!(rm.camera_resource_count(), 0);
}

#[test]
fn test_create_camera_resource() {
    let mut rm = ResourceManager::new();
    let resource = rm.create_camera_resource("main", &desc(1.0)).unwrap();

    assert_eq!(resource.name(), "main");
    assert_eq!(resource.parameters().fov, 1.0);
    assert_eq!(rm.camera_resource_count(), 1);
}

#[test]
fn test_create_duplicate_name_fails() {
    let mut rm = ResourceManager::new();
    rm.create_camera_resource("main", &desc(1.0)).unwrap();

    let result = rm.create_camera_resource("main", &desc(0.5));

    assert!(matches!(result, Err(Error::AlreadyExists(_))));
    assert_eq!(rm.camera_resource("main").unwrap().parameters().fov, 1.0);
}

#[test]
fn test_create_invalid_desc_fails() {
    let mut rm = ResourceManager::new();
    let bad = CameraResourceDesc { near_z: 10.0, far_z: 1.0, ..desc(1.0) };

    assert!(matches!(rm.create_camera_resource("bad", &bad), Err(Error::InvalidParameters(_))));
    assert_eq!(rm.camera_resource_count(), 0);
}

// ============================================================================
// Tests: Get / Remove
// ============================================================================

#[test]
fn test_camera_resource_not_found() {
    let rm = ResourceManager::new();
    assert!(rm.camera_resource("nonexistent").is_none());
}

#[test]
fn test_remove_camera_resource() {
    let mut rm = ResourceManager::new();
    rm.create_camera_resource("main", &desc(1.0)).unwrap();

    assert!(rm.remove_camera_resource("main").is_some());
    assert!(rm.remove_camera_resource("main").is_none());
    assert_eq!(rm.camera_resource_count(), 0);
}

// ============================================================================
// Tests: Reload
// ============================================================================

#[test]
fn test_reload_replaces_resource() {
    let mut rm = ResourceManager::new();
    let old = rm.create_camera_resource("main", &desc(1.0)).unwrap();

    let new = rm.reload_camera_resource("main", &desc(0.5)).unwrap();

    assert_eq!(new.parameters().fov, 0.5);
    assert_eq!(rm.camera_resource("main").unwrap().parameters().fov, 0.5);
    // Previously handed-out handles keep the old data
    assert_eq!(old.parameters().fov, 1.0);
}

#[test]
fn test_reload_never_loaded_is_not_found() {
    let mut rm = ResourceManager::new();
    let result = rm.reload_camera_resource("ghost", &desc(1.0));
    assert!(result.unwrap_err().is_not_found());
}

#[test]
fn test_reload_invalid_keeps_old_resource() {
    let mut rm = ResourceManager::new();
    rm.create_camera_resource("main", &desc(1.0)).unwrap();

    let result = rm.reload_camera_resource("main", &desc(-1.0));

    assert!(matches!(result, Err(Error::InvalidParameters(_))));
    assert_eq!(rm.camera_resource("main").unwrap().parameters().fov, 1.0);
}

#[test]
fn test_reload_notifies_callbacks() {
    let mut rm = ResourceManager::new();
    rm.create_camera_resource("main", &desc(1.0)).unwrap();

    let seen: Arc<Mutex<Vec<(String, f32)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    rm.register_reload_callback(Box::new(move |resource: &Arc<CameraResource>| {
        sink.lock().unwrap().push((resource.name().to_string(), resource.parameters().fov));
    }));

    rm.reload_camera_resource("main", &desc(0.75)).unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![("main".to_string(), 0.75)]);
}

#[test]
fn test_failed_reload_does_not_notify() {
    let mut rm = ResourceManager::new();
    rm.create_camera_resource("main", &desc(1.0)).unwrap();

    let calls = Arc::new(Mutex::new(0usize));
    let counter = Arc::clone(&calls);
    rm.register_reload_callback(Box::new(move |_: &Arc<CameraResource>| {
        *counter.lock().unwrap() += 1;
    }));

    let _ = rm.reload_camera_resource("main", &desc(0.0));
    let _ = rm.reload_camera_resource("ghost", &desc(1.0));

    assert_eq!(*calls.lock().unwrap(), 0);
}
