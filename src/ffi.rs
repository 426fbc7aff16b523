//! C ABI over [`DirectedGraph`] and the bidirectional search
//!
//! Failures are reported through an `int` status out-parameter using the codes
//! in [`crate::status`]; a NULL graph pointer yields `NO_GRAPH`.

use crate::algorithm::bidirectional::find_shortest_path;
use crate::graph::directed::DirectedGraph;
use crate::graph::{Graph, MutableGraph};
use crate::status;
use libc::c_int;
use ordered_float::OrderedFloat;

pub struct FfiGraph {
    graph: DirectedGraph<OrderedFloat<f64>>,
}

#[no_mangle]
pub extern "C" fn bidir_graph_new() -> *mut FfiGraph {
    Box::into_raw(Box::new(FfiGraph {
        graph: DirectedGraph::new(),
    }))
}

/// Adds an edge, creating missing endpoints; false for NULL or a negative or non-finite weight
#[no_mangle]
pub extern "C" fn bidir_graph_add_edge(
    g: *mut FfiGraph,
    tail: usize,
    head: usize,
    weight: f64,
) -> bool {
    match unsafe { g.as_mut() } {
        Some(g) => g.graph.add_edge(tail, head, OrderedFloat(weight)),
        None => false,
    }
}

#[no_mangle]
pub extern "C" fn bidir_graph_has_vertex(g: *const FfiGraph, vertex: usize) -> bool {
    match unsafe { g.as_ref() } {
        Some(g) => g.graph.has_vertex(vertex),
        None => false,
    }
}

#[no_mangle]
pub extern "C" fn bidir_graph_free(g: *mut FfiGraph) {
    if !g.is_null() {
        unsafe {
            drop(Box::from_raw(g));
        }
    }
}

#[repr(C)]
pub struct FfiPath {
    pub vertices: *mut usize,
    pub len: usize,
    pub length: f64,
}

#[no_mangle]
pub extern "C" fn bidir_path_free(path: *mut FfiPath) {
    if !path.is_null() {
        unsafe {
            if !(*path).vertices.is_null() {
                drop(Vec::from_raw_parts((*path).vertices, (*path).len, (*path).len));
            }
            drop(Box::from_raw(path));
        }
    }
}

/// Runs a search; returns NULL and sets `out_status` on failure
///
/// `out_status` may be NULL. On success it is set to `OK` and the returned path must
/// be released with `bidir_path_free`.
#[no_mangle]
pub extern "C" fn bidir_find_shortest_path(
    g: *const FfiGraph,
    source: usize,
    target: usize,
    out_status: *mut c_int,
) -> *mut FfiPath {
    let graph = unsafe { g.as_ref() }.map(|g| &g.graph);
    let (code, path) = match find_shortest_path::<OrderedFloat<f64>, _>(graph, source, target) {
        Ok(path) => {
            let vertices = path.vertices.into_boxed_slice();
            let len = vertices.len();
            let ptr = Box::into_raw(vertices) as *mut usize;
            let result = Box::into_raw(Box::new(FfiPath {
                vertices: ptr,
                len,
                length: path.length.into_inner(),
            }));
            (status::OK, result)
        }
        Err(err) => (err.status_code(), std::ptr::null_mut()),
    };

    if let Some(out_status) = unsafe { out_status.as_mut() } {
        *out_status = code as c_int;
    }
    path
}
