use std::ffi::CString;
use std::ptr;

use gdal_glue_sys::{self, CPLErr};

use crate::errors::*;
use crate::gdal_major_object::MajorObject;
use crate::utils::{_last_cpl_err, _last_null_pointer_err, _string, _string_array, _string_tuple};

/// Description and `KEY=VALUE` metadata of a [`MajorObject`].
///
/// `domain` `""` is the default domain.
pub trait Metadata: MajorObject {
    fn description(&self) -> Result<String> {
        let c_res = unsafe { gdal_glue_sys::GDALGetDescription(self.gdal_object_ptr()) };
        if c_res.is_null() {
            return Err(_last_null_pointer_err("GDALGetDescription"));
        }
        Ok(_string(c_res))
    }

    fn set_description(&mut self, description: &str) -> Result<()> {
        let c_description = CString::new(description)?;
        unsafe {
            gdal_glue_sys::GDALSetDescription(self.gdal_object_ptr(), c_description.as_ptr())
        };
        Ok(())
    }

    /// Domains with at least one item. Drivers without domain support return none.
    fn metadata_domains(&self) -> Vec<String> {
        let c_domains = unsafe { gdal_glue_sys::GDALGetMetadataDomainList(self.gdal_object_ptr()) };
        let domains = _string_array(c_domains);
        unsafe { gdal_glue_sys::CSLDestroy(c_domains) };
        domains
    }

    /// All items of `domain`, `None` if the domain is empty.
    fn metadata_domain(&self, domain: &str) -> Option<Vec<(String, String)>> {
        let c_domain = CString::new(domain).ok()?;
        let c_items =
            unsafe { gdal_glue_sys::GDALGetMetadata(self.gdal_object_ptr(), c_domain.as_ptr()) };
        if c_items.is_null() {
            return None;
        }
        let mut items = Vec::new();
        let mut i = 0;
        loop {
            let entry = unsafe { c_items.add(i).read() };
            if entry.is_null() {
                break;
            }
            if let Some(pair) = _string_tuple(entry, '=') {
                items.push(pair);
            }
            i += 1;
        }
        Some(items)
    }

    fn metadata_item(&self, key: &str, domain: &str) -> Option<String> {
        let c_key = CString::new(key).ok()?;
        let c_domain = CString::new(domain).ok()?;
        let c_res = unsafe {
            gdal_glue_sys::GDALGetMetadataItem(
                self.gdal_object_ptr(),
                c_key.as_ptr(),
                c_domain.as_ptr(),
            )
        };
        if c_res.is_null() {
            None
        } else {
            Some(_string(c_res))
        }
    }

    fn set_metadata_item(&mut self, key: &str, value: &str, domain: &str) -> Result<()> {
        let c_key = CString::new(key)?;
        let c_value = CString::new(value)?;
        let c_domain = if domain.is_empty() {
            None
        } else {
            Some(CString::new(domain)?)
        };

        let rv = unsafe {
            gdal_glue_sys::GDALSetMetadataItem(
                self.gdal_object_ptr(),
                c_key.as_ptr(),
                c_value.as_ptr(),
                c_domain.as_ref().map_or(ptr::null(), |d| d.as_ptr()),
            )
        };
        if rv != CPLErr::CE_None {
            return Err(_last_cpl_err(rv));
        }
        Ok(())
    }
}
