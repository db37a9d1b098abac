use libc::{c_char, c_int};

/// `CSLConstList` from `cpl_port.h`. GDAL declares it `char const* const*`
/// but accepts any string list.
pub type CSLConstList = *mut *mut c_char;

extern "C" {
    pub fn CSLAddString(papszStrList: *mut *mut c_char, pszNewString: *const c_char)
        -> *mut *mut c_char;
    pub fn CSLSetNameValue(
        papszStrList: *mut *mut c_char,
        pszName: *const c_char,
        pszValue: *const c_char,
    ) -> *mut *mut c_char;
    pub fn CSLFetchNameValue(papszStrList: CSLConstList, pszName: *const c_char) -> *const c_char;
    pub fn CSLCount(papszStrList: CSLConstList) -> c_int;
    pub fn CSLDuplicate(papszStrList: CSLConstList) -> *mut *mut c_char;
    pub fn CSLDestroy(papszStrList: *mut *mut c_char);

    /// Splits `KEY=VALUE` (or `KEY:VALUE`). `*ppszKey` must be released with `VSIFree`.
    pub fn CPLParseNameValue(pszNameValue: *const c_char, ppszKey: *mut *mut c_char)
        -> *const c_char;
}
