#![allow(bad_style, clippy::all)]

use libc::*;

use gpgme_shim_sys::*;

include!(concat!(env!("OUT_DIR"), "/all.rs"));
