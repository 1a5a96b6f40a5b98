use std::env;

fn main() {
    let mut cfg = ctest::TestGenerator::new();
    if let Some(paths) = env::var_os("DEP_GPGME_INCLUDE") {
        for p in env::split_paths(&paths) {
            cfg.include(p);
        }
    }
    cfg.header("gpgme.h");
    cfg.cfg("ctest", None);

    cfg.flag("-Wno-deprecated-declarations");
    cfg.type_name(|ty, is_struct, _| {
        if is_struct && ty.starts_with("_gpgme_") {
            format!("struct {}", ty)
        } else {
            ty.into()
        }
    });
    cfg.skip_struct(|s| match s {
        // Declared opaque
        "_gpgme_key_sig" | "_gpgme_tofu_info" | "_gpgme_sig_notation" => true,
        _ => false,
    });
    cfg.skip_signededness(|s| s.ends_with("_t"));
    cfg.skip_field(|_, f| f == "bitfield");
    // Bit masks over the bitfield word have no C counterpart.
    cfg.skip_const(|c| {
        ["GPGME_KEY_", "GPGME_SUBKEY_", "GPGME_UID_", "GPGME_SIGNATURE_"]
            .iter()
            .any(|p| c.starts_with(p))
            || c.starts_with("GPGME_ORIGIN_")
    });

    cfg.generate("../gpgme-shim-sys/src/lib.rs", "all.rs");
}
