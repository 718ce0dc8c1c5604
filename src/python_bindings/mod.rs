//! Python bindings that expose flat-tree arithmetic via PyO3.
use pyo3::{exceptions::PyValueError, prelude::*, types::PyModule};

use crate::{tree, FlatNode, FlatTreeError};

fn to_py_err(err: FlatTreeError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn out_of_range(what: &str, index: u64) -> PyErr {
    PyValueError::new_err(format!("{} of {} does not fit in 64 bits", what, index))
}

/// Python-facing node with cached depth and offset.
#[pyclass(name = "FlatNode", frozen)]
#[derive(Debug, Clone, Copy)]
pub struct PyFlatNode {
    inner: FlatNode,
}

#[pymethods]
impl PyFlatNode {
    #[new]
    /// Create the node at a flat index.
    pub fn new(index: u64) -> Self {
        Self {
            inner: FlatNode::new(index),
        }
    }

    /// Create the node at `(depth, offset)`.
    #[staticmethod]
    pub fn at(depth: u32, offset: u64) -> PyResult<Self> {
        tree::checked_index(depth, offset)
            .map(Self::new)
            .ok_or_else(|| PyValueError::new_err("position does not fit in 64 bits"))
    }

    /// Flat index.
    #[getter]
    pub fn index(&self) -> u64 {
        self.inner.index()
    }

    /// Distance from the leaf level.
    #[getter]
    pub fn depth(&self) -> u32 {
        self.inner.depth()
    }

    /// Position among nodes of the same depth.
    #[getter]
    pub fn offset(&self) -> u64 {
        self.inner.offset()
    }

    /// Whether the node is a leaf.
    pub fn is_leaf(&self) -> bool {
        self.inner.is_leaf()
    }

    /// Parent node.
    ///
    /// Raises:
    ///     ValueError: if the parent lies beyond 64 bits.
    pub fn parent(&self) -> PyResult<Self> {
        let index = self.inner.index();
        tree::checked_parent(index)
            .map(Self::new)
            .ok_or_else(|| out_of_range("parent", index))
    }

    /// Sibling node.
    ///
    /// Raises:
    ///     ValueError: if the sibling lies beyond 64 bits.
    pub fn sibling(&self) -> PyResult<Self> {
        let index = self.inner.index();
        tree::checked_sibling(index)
            .map(Self::new)
            .ok_or_else(|| out_of_range("sibling", index))
    }

    /// `(left, right)` children.
    ///
    /// Raises:
    ///     ValueError: if the node is a leaf.
    pub fn children(&self) -> PyResult<(Self, Self)> {
        let (left, right) = self.inner.children().map_err(to_py_err)?;
        Ok((Self { inner: left }, Self { inner: right }))
    }

    /// Inclusive `(left, right)` leaf span.
    pub fn spans(&self) -> (u64, u64) {
        self.inner.spans()
    }

    /// Number of indices in the subtree.
    pub fn count(&self) -> u64 {
        self.inner.count()
    }

    fn __repr__(&self) -> String {
        format!("FlatNode({})", self.inner)
    }
}

#[pyfunction]
fn depth(index: u64) -> u32 {
    tree::depth(index)
}

#[pyfunction]
#[pyo3(signature = (index, depth = 0))]
fn offset(index: u64, depth: u32) -> u64 {
    tree::offset_with_depth(index, depth)
}

#[pyfunction(name = "index")]
fn index_of(depth: u32, offset: u64) -> PyResult<u64> {
    tree::checked_index(depth, offset)
        .ok_or_else(|| PyValueError::new_err("position does not fit in 64 bits"))
}

#[pyfunction]
fn parent(index: u64) -> PyResult<u64> {
    tree::checked_parent(index).ok_or_else(|| out_of_range("parent", index))
}

#[pyfunction]
fn sibling(index: u64) -> PyResult<u64> {
    tree::checked_sibling(index).ok_or_else(|| out_of_range("sibling", index))
}

#[pyfunction]
fn uncle(index: u64) -> PyResult<u64> {
    tree::checked_uncle(index).ok_or_else(|| out_of_range("uncle", index))
}

#[pyfunction]
#[pyo3(signature = (index, depth = 0))]
fn left_child(index: u64, depth: u32) -> PyResult<u64> {
    tree::left_child_with_depth(index, depth).map_err(to_py_err)
}

#[pyfunction]
#[pyo3(signature = (index, depth = 0))]
fn right_child(index: u64, depth: u32) -> PyResult<u64> {
    tree::right_child_with_depth(index, depth).map_err(to_py_err)
}

#[pyfunction]
#[pyo3(signature = (index, depth = 0))]
fn children(index: u64, depth: u32) -> PyResult<(u64, u64)> {
    tree::children_with_depth(index, depth).map_err(to_py_err)
}

#[pyfunction]
#[pyo3(signature = (index, depth = 0))]
fn spans(index: u64, depth: u32) -> (u64, u64) {
    tree::spans_with_depth(index, depth)
}

#[pyfunction]
#[pyo3(signature = (index, depth = 0))]
fn count(index: u64, depth: u32) -> u64 {
    tree::count_with_depth(index, depth)
}

#[pyfunction]
fn full_roots(boundary: u64) -> PyResult<Vec<u64>> {
    tree::full_roots(boundary).map_err(to_py_err)
}

/// Create Python module.
#[pymodule]
pub fn flat_tree_py(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyFlatNode>()?;
    m.add_function(wrap_pyfunction!(depth, m)?)?;
    m.add_function(wrap_pyfunction!(offset, m)?)?;
    m.add_function(wrap_pyfunction!(index_of, m)?)?;
    m.add_function(wrap_pyfunction!(parent, m)?)?;
    m.add_function(wrap_pyfunction!(sibling, m)?)?;
    m.add_function(wrap_pyfunction!(uncle, m)?)?;
    m.add_function(wrap_pyfunction!(left_child, m)?)?;
    m.add_function(wrap_pyfunction!(right_child, m)?)?;
    m.add_function(wrap_pyfunction!(children, m)?)?;
    m.add_function(wrap_pyfunction!(spans, m)?)?;
    m.add_function(wrap_pyfunction!(count, m)?)?;
    m.add_function(wrap_pyfunction!(full_roots, m)?)?;
    Ok(())
}
