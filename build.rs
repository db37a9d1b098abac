use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    // set by gdal-glue-sys through `cargo:version_number`, it declares `links = "gdal"`
    println!("cargo:rerun-if-env-changed=DEP_GDAL_VERSION_NUMBER");
    let gdal_version = env::var("DEP_GDAL_VERSION_NUMBER")
        .expect("The gdal-glue-sys build script did not report a GDAL version number")
        .parse::<u64>()
        .expect("DEP_GDAL_VERSION_NUMBER is not an integer");

    // #define GDAL_COMPUTE_VERSION(maj,min,rev) ((maj)*1000000+(min)*10000+(rev)*100)
    let major = gdal_version / 1_000_000;
    let minor = (gdal_version - major * 1_000_000) / 10_000;
    let rev = (gdal_version - major * 1_000_000 - minor * 10_000) / 100;

    if major < 2 {
        panic!("GDAL version must be >= 2.0, found {major}.{minor}.{rev}");
    }

    println!("cargo:rustc-cfg=major_is_{}", major);
    for m in 2..=major {
        println!("cargo:rustc-cfg=major_ge_{}", m);
    }
    for m in 0..=minor {
        println!("cargo:rustc-cfg=minor_ge_{}", m);
    }

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is always set by cargo"));
    let constants = format!(
        "/// Major version of the linked GDAL library.\n\
         pub const VERSION_MAJOR: u32 = {major};\n\
         /// Minor version of the linked GDAL library.\n\
         pub const VERSION_MINOR: u32 = {minor};\n\
         /// Revision of the linked GDAL library.\n\
         pub const VERSION_REV: u32 = {rev};\n\
         /// `GDAL_VERSION_NUM` of the linked GDAL library.\n\
         pub const VERSION_NUM: u32 = {gdal_version};\n"
    );
    fs::write(out_dir.join("gdal_version.rs"), constants)
        .expect("unable to write gdal_version.rs to OUT_DIR");
}
