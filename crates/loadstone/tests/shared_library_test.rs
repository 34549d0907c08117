//! End-to-end tests against a real shared library.

mod common;

use std::ffi::c_void;

use loadstone::{Error, LoaderFlags, SharedLibrary, UnixFlag};

type AddFn = extern "C" fn(i32, i32) -> i32;

fn load_fixture() -> SharedLibrary {
    let lib = SharedLibrary::new();
    lib.load(common::fixture("dumb_lib")).expect("load fixture");
    lib
}

#[test]
fn opening_and_using_a_shared_library() {
    let path = common::fixture("dumb_lib");

    let lib = SharedLibrary::new();
    assert!(!lib.is_loaded());
    assert!(lib.native_handle().is_null());

    lib.load(&path).expect("load fixture");
    assert!(lib.is_loaded());
    assert!(!lib.native_handle().is_null());
    assert_eq!(lib.path(), path);

    assert!(lib.has_symbol("add"));
    assert!(lib.has_symbol("abc"));

    let add: AddFn = unsafe { std::mem::transmute(lib.get_symbol("add").expect("add")) };
    assert_eq!(add(2, 2), 4);

    let abc = lib.get_symbol("abc").expect("abc") as *const u8;
    let abc = unsafe { std::slice::from_raw_parts(abc, 3) };
    assert_eq!(abc, b"abc");
}

#[test]
fn absent_symbols_are_reported_by_name() {
    let lib = load_fixture();

    match lib.get_symbol("no_such_symbol") {
        Err(Error::SymbolNotFound(name)) => assert_eq!(name, "no_such_symbol"),
        other => panic!("expected Error::SymbolNotFound, got {other:?}"),
    }
    assert!(!lib.has_symbol("no_such_symbol"));
    assert!(lib.get_symbol_fast("no_such_symbol").is_null());
}

#[test]
fn reloading_a_loaded_handle_is_rejected() {
    let path = common::fixture("dumb_lib");
    let lib = load_fixture();

    match lib.load(&path) {
        Err(Error::AlreadyLoaded(loaded)) => assert_eq!(loaded, path),
        other => panic!("expected Error::AlreadyLoaded, got {other:?}"),
    }
    // The existing load is untouched.
    assert!(lib.is_loaded());
    assert_eq!(lib.path(), path);
    assert!(lib.has_symbol("add"));
}

#[test]
fn unload_round_trip_restores_the_fresh_state() {
    let lib = load_fixture();

    lib.unload();
    assert!(!lib.is_loaded());
    assert!(lib.path().as_os_str().is_empty());
    assert!(lib.native_handle().is_null());
    assert!(matches!(lib.get_symbol("add"), Err(Error::NotLoaded)));

    // Idempotent.
    lib.unload();
    assert!(!lib.is_loaded());

    // The handle is reusable after a round trip.
    lib.load(common::fixture("dumb_lib")).expect("reload");
    assert!(lib.has_symbol("add"));
}

#[test]
fn drop_releases_a_loaded_library() {
    let path = common::fixture("dumb_lib");
    {
        let lib = SharedLibrary::new();
        lib.load(&path).expect("load fixture");
        assert!(lib.is_loaded());
        // Dropped while loaded.
    }

    // A fresh handle can load the same library again.
    let lib = SharedLibrary::new();
    lib.load(&path).expect("load after drop");
    assert!(lib.has_symbol("abc"));
}

#[test]
fn loading_with_explicit_flags() {
    let flags = LoaderFlags::from_flags(&[UnixFlag::Now, UnixFlag::Global], &[]);

    let lib = SharedLibrary::new();
    lib.load_with(common::fixture("dumb_lib"), flags)
        .expect("load with flags");

    let add = lib.get_symbol("add").expect("add");
    assert!(!add.is_null());
    let add: AddFn = unsafe { std::mem::transmute::<*mut c_void, AddFn>(add) };
    assert_eq!(add(40, 2), 42);
}
