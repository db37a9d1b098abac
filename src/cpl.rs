//! Owned GDAL string lists.
//!
//! GDAL passes options around as NULL-terminated `char **` arrays, either as
//! `KEY=VALUE` pairs (creation and open options) or as plain argument vectors
//! (the `gdal_utils.h` programs). [`CslStringList`] owns such an array and
//! releases it with `CSLDestroy`.

use std::ffi::CString;
use std::fmt::{Debug, Formatter};
use std::ptr;

use gdal_glue_sys::{
    CSLAddString, CSLCount, CSLDestroy, CSLDuplicate, CSLFetchNameValue, CSLSetNameValue,
};
use libc::c_char;

use crate::errors::{GdalError, Result};
use crate::utils::{_string, _string_tuple};

pub struct CslStringList {
    list_ptr: *mut *mut c_char,
}

impl CslStringList {
    pub fn new() -> Self {
        Self {
            list_ptr: ptr::null_mut(),
        }
    }

    /// Sets `name` to `value`, replacing an earlier entry with the same name.
    ///
    /// Names are restricted to ASCII alphanumerics, `_` and `-`; values may not
    /// span lines.
    pub fn set_name_value(&mut self, name: &str, value: &str) -> Result<()> {
        if name.is_empty()
            || !name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(GdalError::BadArgument(format!(
                "Invalid characters in name: '{name}'"
            )));
        }
        if value.contains(['\n', '\r']) {
            return Err(GdalError::BadArgument(format!(
                "Invalid characters in value: '{value}'"
            )));
        }
        let psz_name = CString::new(name)?;
        let psz_value = CString::new(value)?;

        unsafe {
            self.list_ptr = CSLSetNameValue(self.list_ptr, psz_name.as_ptr(), psz_value.as_ptr());
        }

        Ok(())
    }

    /// Appends `value` verbatim, used for argument vectors.
    pub fn add_string(&mut self, value: &str) -> Result<()> {
        let psz_value = CString::new(value)?;
        unsafe {
            self.list_ptr = CSLAddString(self.list_ptr, psz_value.as_ptr());
        }
        Ok(())
    }

    pub fn fetch_name_value(&self, key: &str) -> Result<Option<String>> {
        let key = CString::new(key)?;
        let c_value = unsafe { CSLFetchNameValue(self.as_ptr(), key.as_ptr()) };
        if c_value.is_null() {
            return Ok(None);
        }
        Ok(Some(_string(c_value)))
    }

    pub fn len(&self) -> usize {
        (unsafe { CSLCount(self.as_ptr()) }) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the `KEY=VALUE` entries. Entries without `=` are skipped.
    pub fn iter(&self) -> CslStringListIterator<'_> {
        CslStringListIterator {
            list: self,
            idx: 0,
            count: self.len(),
        }
    }

    /// Every entry as stored, including plain arguments.
    pub fn to_vec(&self) -> Vec<String> {
        crate::utils::_string_array(self.list_ptr)
    }

    /// The list stays owned by `self`; GDAL must not free it.
    pub fn as_ptr(&self) -> gdal_glue_sys::CSLConstList {
        self.list_ptr
    }
}

impl Drop for CslStringList {
    fn drop(&mut self) {
        unsafe { CSLDestroy(self.list_ptr) }
    }
}

impl Default for CslStringList {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CslStringList {
    fn clone(&self) -> Self {
        let list_ptr = unsafe { CSLDuplicate(self.list_ptr) };
        Self { list_ptr }
    }
}

pub struct CslStringListIterator<'a> {
    list: &'a CslStringList,
    idx: usize,
    count: usize,
}

impl Iterator for CslStringListIterator<'_> {
    type Item = (String, String);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < self.count {
            let field = unsafe { self.list.list_ptr.add(self.idx).read() };
            self.idx += 1;
            if field.is_null() {
                return None;
            }
            if let Some(pair) = _string_tuple(field, '=') {
                return Some(pair);
            }
        }
        None
    }
}

impl Debug for CslStringList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.to_vec()).finish()
    }
}

impl<const N: usize> TryFrom<&[(&str, &str); N]> for CslStringList {
    type Error = GdalError;

    fn try_from(pairs: &[(&str, &str); N]) -> Result<Self> {
        let mut result = Self::default();
        for (k, v) in pairs {
            result.set_name_value(k, v)?;
        }
        Ok(result)
    }
}

/// Builds an argument vector, one entry per element.
impl TryFrom<&[&str]> for CslStringList {
    type Error = GdalError;

    fn try_from(args: &[&str]) -> Result<Self> {
        let mut result = Self::default();
        for arg in args {
            result.add_string(arg)?;
        }
        Ok(result)
    }
}
