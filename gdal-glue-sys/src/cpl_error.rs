use libc::{c_char, c_int, c_uint, c_void};

pub mod CPLErr {
    pub type Type = libc::c_uint;
    pub const CE_None: Type = 0;
    pub const CE_Debug: Type = 1;
    pub const CE_Warning: Type = 2;
    pub const CE_Failure: Type = 3;
    pub const CE_Fatal: Type = 4;
}

pub type CPLErrorNum = c_int;

pub const CPLE_None: CPLErrorNum = 0;
pub const CPLE_AppDefined: CPLErrorNum = 1;
pub const CPLE_OutOfMemory: CPLErrorNum = 2;
pub const CPLE_FileIO: CPLErrorNum = 3;
pub const CPLE_OpenFailed: CPLErrorNum = 4;
pub const CPLE_IllegalArg: CPLErrorNum = 5;
pub const CPLE_NotSupported: CPLErrorNum = 6;
pub const CPLE_AssertionFailed: CPLErrorNum = 7;
pub const CPLE_NoWriteAccess: CPLErrorNum = 8;
pub const CPLE_UserInterrupt: CPLErrorNum = 9;
pub const CPLE_ObjectNull: CPLErrorNum = 10;

pub type CPLErrorHandler =
    Option<unsafe extern "C" fn(eErrClass: CPLErr::Type, err_no: CPLErrorNum, msg: *const c_char)>;

extern "C" {
    /// Report an error through the active handler. `fmt` is a printf format.
    pub fn CPLError(eErrClass: CPLErr::Type, err_no: CPLErrorNum, fmt: *const c_char, ...);

    /// Erase any traces of previous errors.
    pub fn CPLErrorReset();

    /// Fetch the last error number.
    pub fn CPLGetLastErrorNo() -> CPLErrorNum;

    /// Fetch the last error type.
    pub fn CPLGetLastErrorType() -> CPLErr::Type;

    /// Get the last error message.
    pub fn CPLGetLastErrorMsg() -> *const c_char;

    pub fn CPLGetErrorCounter() -> c_uint;

    pub fn CPLSetErrorHandlerEx(
        pfnErrorHandlerNew: CPLErrorHandler,
        pUserData: *mut c_void,
    ) -> CPLErrorHandler;
    pub fn CPLGetErrorHandlerUserData() -> *mut c_void;
    pub fn CPLPushErrorHandler(pfnErrorHandlerNew: CPLErrorHandler);
    pub fn CPLPopErrorHandler();

    pub fn CPLQuietErrorHandler(eErrClass: CPLErr::Type, err_no: CPLErrorNum, msg: *const c_char);
    pub fn CPLDefaultErrorHandler(eErrClass: CPLErr::Type, err_no: CPLErrorNum, msg: *const c_char);
}
