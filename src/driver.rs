use std::ffi::CString;
use std::path::Path;
use std::ptr;
use std::sync::Mutex;

use gdal_glue_sys::{self, CPLErr, GDALDriverH, GDALMajorObjectH};
use libc::c_int;
use log::debug;

use crate::cpl::CslStringList;
use crate::dataset::Dataset;
use crate::errors::*;
use crate::gdal_major_object::MajorObject;
use crate::metadata::Metadata;
use crate::raster::GdalType;
use crate::utils::{_last_cpl_err, _last_null_pointer_err, _path_to_c_string, _string};

static REGISTERED: Mutex<bool> = Mutex::new(false);

/// Registers every driver GDAL was built with, unless that already happened.
pub fn _register_drivers() {
    let mut registered = REGISTERED.lock().unwrap_or_else(|e| e.into_inner());
    if !*registered {
        unsafe { gdal_glue_sys::GDALAllRegister() };
        *registered = true;
        debug!("registered {} GDAL drivers", unsafe {
            gdal_glue_sys::GDALGetDriverCount()
        });
    }
}

/// A format driver, owned by the GDAL driver manager.
#[derive(Debug, Clone, Copy)]
pub struct Driver {
    c_driver: GDALDriverH,
}

impl Driver {
    /// # Safety
    /// `c_driver` must be a driver handle from the driver manager.
    pub unsafe fn from_c_driver(c_driver: GDALDriverH) -> Driver {
        Driver { c_driver }
    }

    /// # Safety
    /// The handle must not be used after the driver manager is destroyed.
    pub unsafe fn c_driver(&self) -> GDALDriverH {
        self.c_driver
    }

    pub fn short_name(&self) -> String {
        _string(unsafe { gdal_glue_sys::GDALGetDriverShortName(self.c_driver) })
    }

    pub fn long_name(&self) -> String {
        _string(unsafe { gdal_glue_sys::GDALGetDriverLongName(self.c_driver) })
    }

    /// Creates a dataset of `u8` bands.
    pub fn create<P: AsRef<Path>>(
        &self,
        filename: P,
        size_x: usize,
        size_y: usize,
        bands: usize,
    ) -> Result<Dataset> {
        self.create_with_band_type::<u8, _>(filename, size_x, size_y, bands)
    }

    pub fn create_with_band_type<T: GdalType, P: AsRef<Path>>(
        &self,
        filename: P,
        size_x: usize,
        size_y: usize,
        bands: usize,
    ) -> Result<Dataset> {
        self.create_with_band_type_with_options::<T, _>(
            filename,
            size_x,
            size_y,
            bands,
            &CslStringList::new(),
        )
    }

    /// `options` are the driver specific creation options, e.g. `COMPRESS=LZW`.
    pub fn create_with_band_type_with_options<T: GdalType, P: AsRef<Path>>(
        &self,
        filename: P,
        size_x: usize,
        size_y: usize,
        bands: usize,
        options: &CslStringList,
    ) -> Result<Dataset> {
        let c_filename = _path_to_c_string(filename)?;
        let size_x = c_int::try_from(size_x)
            .map_err(|_| GdalError::BadArgument(format!("width {size_x} is too large")))?;
        let size_y = c_int::try_from(size_y)
            .map_err(|_| GdalError::BadArgument(format!("height {size_y} is too large")))?;
        let bands = c_int::try_from(bands)
            .map_err(|_| GdalError::BadArgument(format!("band count {bands} is too large")))?;

        let c_dataset = unsafe {
            gdal_glue_sys::GDALCreate(
                self.c_driver,
                c_filename.as_ptr(),
                size_x,
                size_y,
                bands,
                T::gdal_type(),
                options.as_ptr(),
            )
        };

        if c_dataset.is_null() {
            return Err(_last_null_pointer_err("GDALCreate"));
        };

        Ok(unsafe { Dataset::from_c_dataset(c_dataset) })
    }

    /// Creates a dataset without raster bands, for vector drivers.
    pub fn create_vector_only<P: AsRef<Path>>(&self, filename: P) -> Result<Dataset> {
        let c_filename = _path_to_c_string(filename)?;
        let c_dataset = unsafe {
            gdal_glue_sys::GDALCreate(
                self.c_driver,
                c_filename.as_ptr(),
                0,
                0,
                0,
                gdal_glue_sys::GDALDataType::GDT_Unknown,
                ptr::null_mut(),
            )
        };
        if c_dataset.is_null() {
            return Err(_last_null_pointer_err("GDALCreate"));
        };
        Ok(unsafe { Dataset::from_c_dataset(c_dataset) })
    }

    /// Deletes the dataset at `filename` with every file that belongs to it.
    pub fn delete<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        let c_filename = _path_to_c_string(filename)?;
        let rv = unsafe { gdal_glue_sys::GDALDeleteDataset(self.c_driver, c_filename.as_ptr()) };
        if rv != CPLErr::CE_None {
            return Err(_last_cpl_err(rv));
        }
        Ok(())
    }

    pub fn rename<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        new_filename: P,
        old_filename: Q,
    ) -> Result<()> {
        let c_old_filename = _path_to_c_string(old_filename)?;
        let c_new_filename = _path_to_c_string(new_filename)?;
        let rv = unsafe {
            gdal_glue_sys::GDALRenameDataset(
                self.c_driver,
                c_new_filename.as_ptr(),
                c_old_filename.as_ptr(),
            )
        };
        if rv != CPLErr::CE_None {
            return Err(_last_cpl_err(rv));
        }
        Ok(())
    }

    pub fn copy_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        new_filename: P,
        old_filename: Q,
    ) -> Result<()> {
        let c_old_filename = _path_to_c_string(old_filename)?;
        let c_new_filename = _path_to_c_string(new_filename)?;
        let rv = unsafe {
            gdal_glue_sys::GDALCopyDatasetFiles(
                self.c_driver,
                c_new_filename.as_ptr(),
                c_old_filename.as_ptr(),
            )
        };
        if rv != CPLErr::CE_None {
            return Err(_last_cpl_err(rv));
        }
        Ok(())
    }
}

impl MajorObject for Driver {
    unsafe fn gdal_object_ptr(&self) -> GDALMajorObjectH {
        self.c_driver
    }
}

impl Metadata for Driver {}

/// The process wide driver registry.
///
/// Every accessor registers all drivers on first use, so explicit calls to
/// [`DriverManager::register_all`] are only needed after [`DriverManager::destroy`].
pub struct DriverManager;

impl DriverManager {
    pub fn count() -> usize {
        _register_drivers();
        let count = unsafe { gdal_glue_sys::GDALGetDriverCount() };
        count as usize
    }

    pub fn get_driver(index: usize) -> Result<Driver> {
        _register_drivers();
        let index = c_int::try_from(index)
            .map_err(|_| GdalError::BadArgument(format!("driver index {index} is too large")))?;
        let c_driver = unsafe { gdal_glue_sys::GDALGetDriver(index) };
        if c_driver.is_null() {
            return Err(_last_null_pointer_err("GDALGetDriver"));
        }
        Ok(Driver { c_driver })
    }

    pub fn get_driver_by_name(name: &str) -> Result<Driver> {
        _register_drivers();
        let c_name = CString::new(name)?;
        let c_driver = unsafe { gdal_glue_sys::GDALGetDriverByName(c_name.as_ptr()) };
        if c_driver.is_null() {
            return Err(_last_null_pointer_err("GDALGetDriverByName"));
        };
        Ok(Driver { c_driver })
    }

    /// The driver that would open `filename`, `None` if no driver recognises it.
    ///
    /// `file_list` are the other files of the directory, it spares GDAL a scan.
    pub fn identify_driver<P: AsRef<Path>>(
        filename: P,
        file_list: &[&str],
    ) -> Result<Option<Driver>> {
        _register_drivers();
        let c_filename = _path_to_c_string(filename)?;
        let c_file_list = CslStringList::try_from(file_list)?;
        let c_driver = unsafe {
            gdal_glue_sys::GDALIdentifyDriver(
                c_filename.as_ptr(),
                if file_list.is_empty() {
                    ptr::null_mut()
                } else {
                    c_file_list.as_ptr()
                },
            )
        };
        if c_driver.is_null() {
            return Ok(None);
        }
        Ok(Some(Driver { c_driver }))
    }

    /// Registers `driver` again, returning its index.
    pub fn register_driver(driver: &Driver) -> usize {
        let index = unsafe { gdal_glue_sys::GDALRegisterDriver(driver.c_driver) };
        index as usize
    }

    /// Removes `driver` from the registry. The driver object stays alive.
    pub fn deregister_driver(driver: &Driver) {
        unsafe { gdal_glue_sys::GDALDeregisterDriver(driver.c_driver) };
    }

    pub fn register_all() {
        let mut registered = REGISTERED.lock().unwrap_or_else(|e| e.into_inner());
        unsafe { gdal_glue_sys::GDALAllRegister() };
        *registered = true;
        debug!("registered {} GDAL drivers", unsafe {
            gdal_glue_sys::GDALGetDriverCount()
        });
    }

    /// Destroys every driver and closes every dataset still open.
    ///
    /// The next lookup registers the drivers again.
    ///
    /// # Safety
    /// No [`Dataset`] or [`Driver`] obtained before the call may be used or
    /// dropped afterwards: their handles are freed by GDAL.
    pub unsafe fn destroy() {
        let mut registered = REGISTERED.lock().unwrap_or_else(|e| e.into_inner());
        unsafe { gdal_glue_sys::GDALDestroyDriverManager() };
        *registered = false;
        debug!("destroyed the GDAL driver manager");
    }
}
