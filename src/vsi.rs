//! In-memory files under `/vsimem/`.

use std::path::Path;
use std::ptr;

use gdal_glue_sys::{VSIFCloseL, VSIFileFromMemBuffer, VSIFree, VSIGetMemFileBuffer, VSIUnlink};

use crate::errors::{GdalError, Result};
use crate::utils::{_last_null_pointer_err, _path_to_c_string};

/// Creates a `/vsimem/` file holding a copy of `data`.
///
/// GDAL owns the copy and frees it with `VSIFree` on unlink, so it is
/// allocated with the C allocator.
pub fn create_mem_file<P: AsRef<Path>>(file_name: P, data: &[u8]) -> Result<()> {
    let file_name = _path_to_c_string(file_name)?;

    let buffer = unsafe { libc::malloc(data.len().max(1)) } as *mut u8;
    if buffer.is_null() {
        return Err(GdalError::BadArgument(format!(
            "unable to allocate {} bytes for an in-memory file",
            data.len()
        )));
    }
    unsafe { ptr::copy_nonoverlapping(data.as_ptr(), buffer, data.len()) };

    let handle = unsafe {
        VSIFileFromMemBuffer(file_name.as_ptr(), buffer, data.len() as u64, true as i32)
    };

    if handle.is_null() {
        unsafe { VSIFree(buffer.cast()) };
        return Err(_last_null_pointer_err("VSIFileFromMemBuffer"));
    }

    unsafe {
        VSIFCloseL(handle);
    }

    Ok(())
}

pub fn unlink_mem_file<P: AsRef<Path>>(file_name: P) -> Result<()> {
    let file_name = file_name.as_ref();
    let file_name_c = _path_to_c_string(file_name)?;

    let rv = unsafe { VSIUnlink(file_name_c.as_ptr()) };

    if rv != 0 {
        return Err(GdalError::UnlinkMemFile {
            file_name: file_name.display().to_string(),
        });
    }

    Ok(())
}

/// Removes the file and returns its bytes.
pub fn get_vsi_mem_file_bytes_owned<P: AsRef<Path>>(file_name: P) -> Result<Vec<u8>> {
    let file_name = _path_to_c_string(file_name)?;

    unsafe {
        let mut length: u64 = 0;
        let bytes = VSIGetMemFileBuffer(file_name.as_ptr(), &mut length, true as i32);

        if bytes.is_null() {
            return Err(_last_null_pointer_err("VSIGetMemFileBuffer"));
        }

        let vec = std::slice::from_raw_parts(bytes, length as usize).to_vec();
        VSIFree(bytes.cast());

        Ok(vec)
    }
}

/// Runs `fun` over the file's bytes without taking them.
pub fn call_on_mem_file_bytes<F, R, P: AsRef<Path>>(file_name: P, fun: F) -> Result<R>
where
    F: FnOnce(&[u8]) -> R,
{
    let file_name = _path_to_c_string(file_name)?;

    unsafe {
        let mut length: u64 = 0;
        let bytes = VSIGetMemFileBuffer(file_name.as_ptr(), &mut length, false as i32);

        if bytes.is_null() {
            return Err(_last_null_pointer_err("VSIGetMemFileBuffer"));
        }

        Ok(fun(std::slice::from_raw_parts(bytes, length as usize)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::SuppressGDALErrorLog;

    #[test]
    fn create_read_unlink() {
        let file_name = "/vsimem/cc11e3b2-create_read_unlink.bin";
        create_mem_file(file_name, &[1_u8, 2, 3, 4]).unwrap();

        let len = call_on_mem_file_bytes(file_name, |bytes| bytes.len()).unwrap();
        assert_eq!(len, 4);

        let bytes = get_vsi_mem_file_bytes_owned(file_name).unwrap();
        assert_eq!(bytes, vec![1_u8, 2, 3, 4]);

        // taking the bytes removed the file
        let _nolog = SuppressGDALErrorLog::new();
        assert!(matches!(
            unlink_mem_file(file_name),
            Err(GdalError::UnlinkMemFile { .. })
        ));
    }

    #[test]
    fn empty_file() {
        let file_name = "/vsimem/1c8ad3c4-empty_file.bin";
        create_mem_file(file_name, &[]).unwrap();
        assert_eq!(call_on_mem_file_bytes(file_name, |b| b.to_vec()).unwrap(), Vec::<u8>::new());
        unlink_mem_file(file_name).unwrap();
    }

    #[test]
    fn missing_file() {
        let _nolog = SuppressGDALErrorLog::new();
        assert!(matches!(
            get_vsi_mem_file_bytes_owned("/vsimem/does-not-exist.bin"),
            Err(GdalError::NullPointer {
                method_name: "VSIGetMemFileBuffer",
                ..
            })
        ));
    }
}
