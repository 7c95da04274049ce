//! An in-memory R-tree over geometry bounding rectangles.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use rstar::{Envelope, RTree, RTreeObject, SelectionFunction, AABB};

use crate::bounding_box::BoundingBox;
use crate::config::{RectangleComparison, SpatialConfig};
use crate::errors::SpatialResult;
use crate::geometry::SpatialObject;

/// Answers `MBREquals` lookups for many geometries at once.
///
/// Each key maps to the bounding rectangle of the geometry it was inserted
/// with; the geometry itself is not kept. Clones share the same tree, and
/// every operation takes the internal lock, so an index can be handed to
/// several threads.
///
/// # Examples
///
/// ```rust
/// use creof_spatial::{LineString, MbrIndex, Polygon};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let index = MbrIndex::new();
/// index.insert("small", &Polygon::new(vec![vec![
///     [5.0, 5.0], [7.0, 5.0], [7.0, 7.0], [5.0, 7.0], [5.0, 5.0],
/// ]])?)?;
///
/// let line = LineString::new(vec![[5.0, 5.0], [7.0, 7.0], [6.0, 5.0]])?;
/// assert_eq!(index.find_mbr_equals(&line)?, vec!["small"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MbrIndex<K> {
    inner: Arc<MbrIndexInner<K>>,
}

struct MbrIndexInner<K> {
    state: RwLock<IndexState<K>>,
    config: SpatialConfig,
}

struct IndexState<K> {
    tree: RTree<IndexedRectangle<K>>,
    rectangles: BTreeMap<K, BoundingBox>,
}

#[derive(Debug, Clone, PartialEq)]
struct IndexedRectangle<K> {
    key: K,
    bbox: BoundingBox,
}

impl<K> RTreeObject for IndexedRectangle<K> {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        to_envelope(&self.bbox)
    }
}

fn to_envelope(bbox: &BoundingBox) -> AABB<[f64; 2]> {
    AABB::from_corners([bbox.min_x, bbox.min_y], [bbox.max_x, bbox.max_y])
}

/// Walks only the nodes that may hold a rectangle equal to `target`.
struct EqualRectangles {
    target: BoundingBox,
    search: AABB<[f64; 2]>,
    comparison: RectangleComparison,
}

impl EqualRectangles {
    fn new(target: BoundingBox, comparison: RectangleComparison) -> Self {
        let search = to_envelope(&target.expanded_by(comparison.search_margin()));
        Self {
            target,
            search,
            comparison,
        }
    }
}

impl<K> SelectionFunction<IndexedRectangle<K>> for EqualRectangles {
    fn should_unpack_parent(&self, envelope: &AABB<[f64; 2]>) -> bool {
        envelope.intersects(&self.search)
    }

    fn should_unpack_leaf(&self, leaf: &IndexedRectangle<K>) -> bool {
        leaf.bbox.equals_with(&self.target, self.comparison)
    }
}

impl<K> Default for MbrIndex<K>
where
    K: Ord + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> MbrIndex<K>
where
    K: Ord + Clone,
{
    /// Creates an empty index with exact rectangle comparison.
    pub fn new() -> Self {
        Self::with_config(SpatialConfig::default())
    }

    pub fn with_config(config: SpatialConfig) -> Self {
        Self {
            inner: Arc::new(MbrIndexInner {
                state: RwLock::new(IndexState {
                    tree: RTree::new(),
                    rectangles: BTreeMap::new(),
                }),
                config,
            }),
        }
    }

    pub fn config(&self) -> &SpatialConfig {
        &self.inner.config
    }

    /// Indexes the bounding rectangle of `geometry` under `key`, replacing
    /// any rectangle already stored for that key.
    ///
    /// # Errors
    /// Returns [`SpatialError::InvalidValue`](crate::SpatialError::InvalidValue)
    /// if the geometry is empty. The index is left unchanged.
    pub fn insert<G: SpatialObject>(&self, key: K, geometry: &G) -> SpatialResult<()> {
        let bbox = geometry.bounding_box()?;
        self.insert_rectangle(key, bbox);
        Ok(())
    }

    /// Indexes a precomputed rectangle under `key`.
    pub fn insert_rectangle(&self, key: K, bbox: BoundingBox) {
        let mut state = self.inner.state.write();
        if let Some(previous) = state.rectangles.insert(key.clone(), bbox) {
            let stale = IndexedRectangle {
                key: key.clone(),
                bbox: previous,
            };
            state.tree.remove(&stale);
            log::debug!("Replaced indexed rectangle {}", previous);
        }
        state.tree.insert(IndexedRectangle { key, bbox });
    }

    /// Removes `key` from the index, returning its rectangle if it was present.
    pub fn remove(&self, key: &K) -> Option<BoundingBox> {
        let mut state = self.inner.state.write();
        let bbox = state.rectangles.remove(key)?;
        let entry = IndexedRectangle {
            key: key.clone(),
            bbox,
        };
        if state.tree.remove(&entry).is_none() {
            log::warn!("Rectangle {} was registered but missing from the tree", bbox);
        }
        Some(bbox)
    }

    pub fn rectangle(&self, key: &K) -> Option<BoundingBox> {
        self.inner.state.read().rectangles.get(key).copied()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.state.read().rectangles.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.state.read().rectangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.state.read().rectangles.is_empty()
    }

    pub fn clear(&self) {
        let mut state = self.inner.state.write();
        state.tree = RTree::new();
        state.rectangles.clear();
    }

    /// Keys whose rectangle equals the bounding rectangle of `geometry`,
    /// in ascending key order.
    ///
    /// # Errors
    /// Returns [`SpatialError::InvalidValue`](crate::SpatialError::InvalidValue)
    /// if the geometry is empty.
    pub fn find_mbr_equals<G: SpatialObject>(&self, geometry: &G) -> SpatialResult<Vec<K>> {
        let bbox = geometry.bounding_box()?;
        Ok(self.find_rectangle_equals(&bbox))
    }

    /// Keys whose rectangle equals `bbox`, in ascending key order.
    pub fn find_rectangle_equals(&self, bbox: &BoundingBox) -> Vec<K> {
        let selection = EqualRectangles::new(*bbox, self.inner.config.comparison());
        let state = self.inner.state.read();
        let mut keys: Vec<K> = state
            .tree
            .locate_with_selection_function(selection)
            .map(|entry| entry.key.clone())
            .collect();
        keys.sort();
        log::trace!("Found {} rectangles equal to {}", keys.len(), bbox);
        keys
    }
}
