use gdal_glue::{Dataset, DriverManager};

#[test]
/// Sequentially run tests, the driver registry is process wide
fn test_driver_registry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.tif");
    DriverManager::get_driver_by_name("GTiff")
        .unwrap()
        .create(&path, 4, 4, 1)
        .unwrap();

    test_deregister_and_register_again(&path);
    test_driver_manager_destruction(&path);
}

fn test_deregister_and_register_again(path: &std::path::Path) {
    let count = DriverManager::count();
    let driver = DriverManager::get_driver_by_name("GTiff").unwrap();

    DriverManager::deregister_driver(&driver);
    assert_eq!(DriverManager::count(), count - 1);
    assert!(DriverManager::get_driver_by_name("GTiff").is_err());

    DriverManager::register_driver(&driver);
    assert_eq!(DriverManager::count(), count);
    assert!(DriverManager::get_driver_by_name("GTiff").is_ok());
    assert!(Dataset::open(path).is_ok());
}

fn test_driver_manager_destruction(path: &std::path::Path) {
    assert!(DriverManager::count() > 0);
    {
        let dataset = Dataset::open(path).unwrap();
        assert_eq!(dataset.raster_count(), 1);
    }

    // no dataset or driver handle is alive here
    unsafe { DriverManager::destroy() };
    // the next lookup registers everything again
    assert!(DriverManager::count() > 0);
    let driver = DriverManager::get_driver_by_name("GTiff").unwrap();
    assert_eq!(driver.short_name(), "GTiff");
    assert!(Dataset::open(path).is_ok());

    unsafe { DriverManager::destroy() };
    DriverManager::register_all();
    assert!(DriverManager::get_driver_by_name("MEM").is_ok());
}
