use semver::Version;

use pkg_config::Config;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Oldest release whose C API is fully covered by the declarations in `src/`.
const MIN_VERSION: (u64, u64) = (2, 2);

fn env_dir(var: &str) -> Option<PathBuf> {
    let dir = env::var_os(var).map(PathBuf::from);

    if let Some(ref dir) = dir {
        if !dir.exists() {
            panic!("{} was set to {}, which doesn't exist.", var, dir.display());
        }
    }

    dir
}

fn find_gdal_dll(lib_dir: &Path) -> io::Result<Option<String>> {
    for e in fs::read_dir(lib_dir)? {
        let e = e?;
        let name = e.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.starts_with("gdal") && name.ends_with(".dll") {
            return Ok(Some(String::from(name)));
        }
    }
    Ok(None)
}

/// Development releases look like `3.7.2dev`, which is not valid semver.
fn parse_version(raw: &str) -> Option<Version> {
    let mut version_string = raw.trim().to_string();
    if let Some(idx) = version_string.rfind(|c: char| c.is_ascii_digit()) {
        if idx + 1 < version_string.len() && !version_string[idx + 1..].starts_with('-') {
            version_string.insert(idx + 1, '-');
        }
    }
    Version::parse(&version_string).ok()
}

fn emit_version_cfgs(version: &Version) {
    println!("cargo:rustc-cfg=major_is_{}", version.major);
    for major in 2..=version.major {
        println!("cargo:rustc-cfg=major_ge_{}", major);
    }
    for minor in 0..=version.minor {
        println!("cargo:rustc-cfg=minor_ge_{}", minor);
    }
}

fn main() {
    println!("cargo:rerun-if-env-changed=GDAL_STATIC");
    println!("cargo:rerun-if-env-changed=GDAL_DYNAMIC");
    println!("cargo:rerun-if-env-changed=GDAL_INCLUDE_DIR");
    println!("cargo:rerun-if-env-changed=GDAL_LIB_DIR");
    println!("cargo:rerun-if-env-changed=GDAL_HOME");
    println!("cargo:rerun-if-env-changed=GDAL_VERSION");

    let mut need_metadata = true;
    let mut lib_name = String::from("gdal");

    let mut prefer_static =
        env::var_os("GDAL_STATIC").is_some() && env::var_os("GDAL_DYNAMIC").is_none();

    let mut lib_dir = env_dir("GDAL_LIB_DIR");
    let home_dir = env_dir("GDAL_HOME");
    let mut version = env::var_os("GDAL_VERSION")
        .map(|vs| vs.to_string_lossy().to_string())
        .and_then(|vs| parse_version(&vs));

    let mut found = false;
    if cfg!(windows) {
        // first, look for a static library in $GDAL_LIB_DIR or $GDAL_HOME/lib
        if let Some(ref lib_dir) = lib_dir {
            if lib_dir.join("gdal_i.lib").exists() {
                prefer_static = true;
                lib_name = String::from("gdal_i");
                found = true;
            }
        }
        if !found {
            if let Some(ref home_dir) = home_dir {
                let home_lib_dir = home_dir.join("lib");
                if home_lib_dir.join("gdal_i.lib").exists() {
                    prefer_static = true;
                    lib_name = String::from("gdal_i");
                    lib_dir = Some(home_lib_dir);
                    found = true;
                }
            }
        }
        if !found {
            // otherwise, look for a gdalxxx.dll in $GDAL_HOME/bin
            if let Some(ref home_dir) = home_dir {
                let bin_dir = home_dir.join("bin");
                if bin_dir.exists() {
                    if let Ok(Some(name)) = find_gdal_dll(&bin_dir) {
                        prefer_static = false;
                        lib_dir = Some(bin_dir);
                        lib_name = name;
                    }
                }
            }
        }
    }

    if let Some(ref home_dir) = home_dir {
        if lib_dir.is_none() {
            let dir = home_dir.join("lib");
            if !dir.exists() {
                panic!(
                    "GDAL_LIB_DIR was not set and {} doesn't exist.",
                    dir.display()
                );
            }
            lib_dir = Some(dir);
        }
    }

    let linked_explicitly = lib_dir.is_some();
    if let Some(lib_dir) = lib_dir {
        let link_type = if prefer_static { "static" } else { "dylib" };

        println!("cargo:rustc-link-lib={link_type}={lib_name}");
        println!("cargo:rustc-link-search={}", lib_dir.display());

        if !prefer_static {
            need_metadata = false;
        }
    }

    let gdal_pkg_config = Config::new()
        .statik(prefer_static)
        .cargo_metadata(need_metadata)
        .probe("gdal");

    if !found && cfg!(target_env = "msvc") && gdal_pkg_config.is_err() {
        panic!("windows-msvc requires gdal_i.lib to be present in either $GDAL_LIB_DIR or $GDAL_HOME\\lib.");
    }

    if !linked_explicitly && gdal_pkg_config.is_err() {
        // GDAL_VERSION was given by hand, rely on the default linker search path
        println!("cargo:rustc-link-lib=dylib={lib_name}");
    }

    if let Ok(gdal) = &gdal_pkg_config {
        if version.is_none() {
            version = parse_version(&gdal.version);
        }
    }

    let Some(version) = version else {
        match &gdal_pkg_config {
            Err(pkg_config::Error::Command { cause, .. })
                if cause.kind() == std::io::ErrorKind::NotFound =>
            {
                panic!("Could not find `pkg-config` in your path. Install it or set GDAL_VERSION.");
            }
            Err(pkg_config_err) => {
                panic!("Error while running `pkg-config`: {}", pkg_config_err);
            }
            Ok(_) => panic!("No GDAL version detected. Set GDAL_VERSION."),
        }
    };

    if (version.major, version.minor) < MIN_VERSION {
        panic!(
            "GDAL {} is too old, at least {}.{} is required.",
            version, MIN_VERSION.0, MIN_VERSION.1
        );
    }

    // #define GDAL_COMPUTE_VERSION(maj,min,rev) ((maj)*1000000+(min)*10000+(rev)*100)
    let gdal_version_number =
        version.major * 1_000_000 + version.minor * 10_000 + version.patch * 100;
    println!("cargo:version_number={}", gdal_version_number);

    emit_version_cfgs(&version);
}
