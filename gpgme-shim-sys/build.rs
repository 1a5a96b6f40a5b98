use std::{
    env,
    error::Error,
    fs::File,
    io::{prelude::*, BufWriter},
    path::PathBuf,
};

const BASELINE: (u8, u8) = (1, 13);
const NEWEST_FEATURE: u8 = 23;

fn parse_version(v: &str) -> Option<(u8, u8)> {
    let mut components = v
        .trim()
        .split('.')
        .scan((), |_, x| x.parse::<u8>().ok())
        .fuse();
    match (components.next(), components.next()) {
        (Some(major), Some(minor)) => Some((major, minor)),
        _ => None,
    }
}

fn feature_version() -> Option<(u8, u8)> {
    (BASELINE.1..=NEWEST_FEATURE)
        .rev()
        .find(|minor| env::var_os(format!("CARGO_FEATURE_V1_{minor}")).is_some())
        .map(|minor| (1, minor))
}

fn detect_version() -> (u8, u8) {
    match system_deps::Config::new().probe() {
        Ok(deps) => {
            if let Some(lib) = deps.get_by_name("gpgme") {
                if let Ok(paths) = env::join_paths(&lib.include_paths) {
                    println!("cargo:include={}", paths.to_string_lossy());
                }
                if let Some(version) = parse_version(&lib.version) {
                    return version;
                }
            }
        }
        Err(e) => {
            println!("cargo:warning=unable to probe gpgme: {e}");
        }
    }

    if let Some(version) = env::var("GPGME_SHIM_VERSION")
        .ok()
        .and_then(|v| parse_version(&v))
    {
        return version;
    }

    let version = feature_version().unwrap_or(BASELINE);
    println!(
        "cargo:warning=assuming gpgme {}.{} header layout",
        version.0, version.1
    );
    version
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-env-changed=GPGME_SHIM_VERSION");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg(ctest)");

    let (major, minor) = detect_version();
    println!("cargo:version={major}.{minor}");

    let path = PathBuf::from(env::var_os("OUT_DIR").ok_or("OUT_DIR is not set")?);
    let mut output = BufWriter::new(File::create(path.join("version.rs"))?);
    writeln!(
        output,
        "pub const MIN_VERSION: &str = \"{major}.{minor}.0\\0\";"
    )?;
    writeln!(
        output,
        "#[macro_export]\nmacro_rules! require_gpgme_ver {{\n\
         ($ver:tt => {{ $($t:tt)* }}) => ($crate::require_gpgme_ver! {{ $ver => {{ $($t)* }} else {{}} }});"
    )?;
    for i in 0..=minor {
        writeln!(
            output,
            "(({major},{i}) => {{ $($t:tt)* }} else {{ $($u:tt)* }}) => ($($t)*);"
        )?;
    }
    for i in 0..major {
        writeln!(
            output,
            "(({i},$ver:tt) => {{ $($t:tt)* }} else {{ $($u:tt)* }}) => ($($t)*);"
        )?;
    }
    writeln!(
        output,
        "($ver:tt => {{ $($t:tt)* }} else {{ $($u:tt)* }}) => ($($u)*);\n}}"
    )?;
    output.flush()?;
    Ok(())
}
