use crate::fp::export::{node_records, render_dot, render_text};
use crate::fp::{build_from_matrix, BuiltTree};
use numpy::PyReadonlyArray2;
use once_cell::sync::Lazy;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

// Trees built from Python, addressed by id until dropped
static TREES: Lazy<Mutex<HashMap<usize, BuiltTree<usize>>>> = Lazy::new(|| Mutex::new(HashMap::new()));
static NEXT_TID: Lazy<Mutex<usize>> = Lazy::new(|| Mutex::new(0));

fn lock<T>(mutex: &Mutex<T>) -> PyResult<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|e| PyRuntimeError::new_err(format!("Lock error: {}", e)))
}

fn with_tree<R>(tid: usize, f: impl FnOnce(&BuiltTree<usize>) -> R) -> PyResult<R> {
    let trees = lock(&TREES)?;
    let tree = trees
        .get(&tid)
        .ok_or_else(|| PyValueError::new_err("Invalid tree ID"))?;
    Ok(f(tree))
}

/// Builds an FP-tree from a one-hot matrix and returns its id.
#[pyfunction]
#[pyo3(name = "build_tree")]
fn build_tree_py(transactions: PyReadonlyArray2<i32>, min_support: usize) -> PyResult<usize> {
    let built = build_from_matrix(transactions.as_array(), min_support)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    let mut tid_lock = lock(&NEXT_TID)?;
    let tid = *tid_lock;
    *tid_lock += 1;
    drop(tid_lock);

    lock(&TREES)?.insert(tid, built);
    Ok(tid)
}

/// `(path, item, parent, link, count)` per node, in creation order.
#[pyfunction]
#[pyo3(name = "tree_nodes")]
fn tree_nodes_py(tid: usize) -> PyResult<Vec<(String, String, String, String, usize)>> {
    with_tree(tid, |tree| {
        node_records(&tree.trie)
            .into_iter()
            .map(|r| (r.path, r.item, r.parent, r.link, r.count))
            .collect()
    })
}

#[pyfunction]
#[pyo3(name = "tree_f_list")]
fn tree_f_list_py(tid: usize) -> PyResult<Vec<(usize, usize)>> {
    with_tree(tid, |tree| {
        tree.f_list
            .iter()
            .map(|(&item, count)| (item, count))
            .collect()
    })
}

#[pyfunction]
#[pyo3(name = "tree_text")]
fn tree_text_py(tid: usize) -> PyResult<String> {
    with_tree(tid, |tree| render_text(&tree.trie))
}

#[pyfunction]
#[pyo3(name = "tree_dot")]
fn tree_dot_py(tid: usize) -> PyResult<String> {
    with_tree(tid, |tree| render_dot(&tree.trie))
}

#[pyfunction]
#[pyo3(name = "drop_tree")]
fn drop_tree_py(tid: usize) -> PyResult<()> {
    lock(&TREES)?
        .remove(&tid)
        .ok_or_else(|| PyValueError::new_err("Invalid tree ID"))?;
    Ok(())
}

#[pymodule]
fn fptrie(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(build_tree_py, m)?)?;
    m.add_function(wrap_pyfunction!(tree_nodes_py, m)?)?;
    m.add_function(wrap_pyfunction!(tree_f_list_py, m)?)?;
    m.add_function(wrap_pyfunction!(tree_text_py, m)?)?;
    m.add_function(wrap_pyfunction!(tree_dot_py, m)?)?;
    m.add_function(wrap_pyfunction!(drop_tree_py, m)?)?;
    Ok(())
}
