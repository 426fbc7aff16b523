#![cfg(feature = "ffi")]

use bidir_dijkstra::ffi::*;
use bidir_dijkstra::status;
use libc::c_int;
use std::ptr;

fn triangle() -> *mut FfiGraph {
    let g = bidir_graph_new();
    assert!(bidir_graph_add_edge(g, 1, 2, 1.0));
    assert!(bidir_graph_add_edge(g, 2, 3, 2.0));
    assert!(bidir_graph_add_edge(g, 3, 1, 3.0));
    g
}

#[test]
fn test_ffi_path_found_and_released() {
    let g = triangle();
    let mut code: c_int = -1;

    let path = bidir_find_shortest_path(g, 1, 3, &mut code);
    assert_eq!(code, status::OK as c_int);
    assert!(!path.is_null());

    let (vertices, length) = unsafe {
        let path = &*path;
        (std::slice::from_raw_parts(path.vertices, path.len).to_vec(), path.length)
    };
    assert_eq!(vertices, vec![1, 2, 3]);
    assert_eq!(length, 3.0);

    bidir_path_free(path);
    bidir_graph_free(g);
}

#[test]
fn test_ffi_null_graph() {
    let mut code: c_int = -1;
    let path = bidir_find_shortest_path(ptr::null(), 1, 3, &mut code);
    assert!(path.is_null());
    assert_eq!(code, status::NO_GRAPH as c_int);

    assert!(!bidir_graph_add_edge(ptr::null_mut(), 1, 2, 1.0));
    assert!(!bidir_graph_has_vertex(ptr::null(), 1));
    bidir_graph_free(ptr::null_mut());
    bidir_path_free(ptr::null_mut());
}

#[test]
fn test_ffi_missing_endpoints_set_both_bits() {
    let g = triangle();
    let mut code: c_int = -1;

    let path = bidir_find_shortest_path(g, 40, 41, &mut code);
    assert!(path.is_null());
    assert_eq!(code, (status::NO_SOURCE_VERTEX | status::NO_TARGET_VERTEX) as c_int);

    let path = bidir_find_shortest_path(g, 1, 41, &mut code);
    assert!(path.is_null());
    assert_eq!(code, status::NO_TARGET_VERTEX as c_int);

    bidir_graph_free(g);
}

#[test]
fn test_ffi_null_status_is_allowed() {
    let g = triangle();

    let path = bidir_find_shortest_path(g, 2, 1, ptr::null_mut());
    assert!(!path.is_null());
    bidir_path_free(path);

    let path = bidir_find_shortest_path(g, 7, 1, ptr::null_mut());
    assert!(path.is_null());

    bidir_graph_free(g);
}

#[test]
fn test_ffi_rejects_bad_weights() {
    let g = bidir_graph_new();
    assert!(!bidir_graph_add_edge(g, 0, 1, -1.0));
    assert!(!bidir_graph_add_edge(g, 0, 1, f64::INFINITY));
    assert!(!bidir_graph_has_vertex(g, 0));
    assert!(bidir_graph_add_edge(g, 0, 1, 0.5));
    assert!(bidir_graph_has_vertex(g, 1));
    bidir_graph_free(g);
}
