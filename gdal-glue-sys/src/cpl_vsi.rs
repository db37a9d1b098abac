use libc::{c_char, c_int};

use crate::GByte;

pub type vsi_l_offset = u64;

#[repr(C)]
pub struct VSILFILE {
    _unused: [u8; 0],
}

extern "C" {
    pub fn VSIFileFromMemBuffer(
        pszFilename: *const c_char,
        pabyData: *mut GByte,
        nDataLength: vsi_l_offset,
        bTakeOwnership: c_int,
    ) -> *mut VSILFILE;
    pub fn VSIFCloseL(fp: *mut VSILFILE) -> c_int;
    pub fn VSIGetMemFileBuffer(
        pszFilename: *const c_char,
        pnDataLength: *mut vsi_l_offset,
        bUnlinkAndSeize: c_int,
    ) -> *mut GByte;
    pub fn VSIUnlink(pszFilename: *const c_char) -> c_int;
}
