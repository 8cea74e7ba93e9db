use std::{mem, ops::DerefMut};

use log::{debug, error};
use rand::Rng;

use crate::config::{Config, FaultPolicy};
use crate::depth::Depth;
use crate::error::{Error, Result};
use crate::limit::{self, Limit};
use crate::node::Node;

/// Llrb manage a single instance of in-memory ordered tree using
/// [left-leaning-red-black][llrb] encoding of 2-3 trees.
///
/// Items are opaque to the tree, they are ordered only through the
/// `less` comparator supplied at construction time. Two items are
/// equivalent when neither one is less than the other.
///
/// Not thread safe, wrap it in a lock to share across threads.
///
/// [llrb]: https://en.wikipedia.org/wiki/Left-leaning_red-black_tree
#[derive(Clone)]
pub struct Llrb<T, F> {
    config: Config,
    less: F,
    root: Option<Box<Node<T>>>,
    n_count: usize, // number of items in the tree.
}

/// Different ways to construct a new Llrb instance.
impl<T, F> Llrb<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Create an empty instance of Llrb, ordered by `less`.
    pub fn new(less: F) -> Llrb<T, F> {
        Llrb::with_config(less, Default::default())
    }

    /// Create an empty instance of Llrb, ordered by `less` and configured
    /// by `config`.
    pub fn with_config(less: F, config: Config) -> Llrb<T, F> {
        debug!(
            "{} new llrb tree, fault-policy:{:?}",
            config.name, config.fault_policy
        );
        Llrb {
            config,
            less,
            root: Default::default(),
            n_count: Default::default(),
        }
    }
}

/// Maintenance API.
impl<T, F> Llrb<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Identify this instance. Applications can choose unique names via
    /// [`Config`].
    #[inline]
    pub fn id(&self) -> String {
        self.config.name.clone()
    }

    /// Return number of items in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_count
    }

    /// Check whether this tree is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }

    /// Return quickly with basic statisics, only entries() and
    /// node_size() are valid with this statisics.
    pub fn stats(&self) -> Stats {
        Stats::new(self.n_count, mem::size_of::<Node<T>>())
    }

    /// Return whether `a` order-precedes `b` under this tree's comparator,
    /// extended with [`Limit::NegInf`] and [`Limit::PosInf`].
    pub fn less_limit(&self, a: Limit<&T>, b: Limit<&T>) -> bool {
        limit::less_limit(&self.less, a, b)
    }

    /// Return the root node, for serializers.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Install `root` as the tree, holding `n_count` items, for
    /// deserializers. The graph is not validated, it must already be
    /// a well formed left-leaning red-black tree under this tree's
    /// comparator. Use [`Llrb::validate`] to check it. Mutating a
    /// malformed graph fails as per [`FaultPolicy`].
    pub fn set_root(&mut self, root: Option<Box<Node<T>>>, n_count: usize) {
        debug!("{} install root with {} items", self.config.name, n_count);
        self.root = root;
        self.n_count = n_count;
    }

    /// Detach the node graph from this tree, leaving it empty.
    pub fn take_root(&mut self) -> Option<Box<Node<T>>> {
        self.n_count = 0;
        self.root.take()
    }

    /// Validate LLRB tree with following rules:
    ///
    /// * Root link is black.
    /// * Red links lean left.
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * Number of blacks should be same under left child and right child.
    /// * Make sure items are in sort order, equivalent items are allowed.
    /// * Number of items matches [`Llrb::len`].
    ///
    /// Additionally return full statistics on the tree. Refer to [`Stats`]
    /// for more information.
    pub fn validate(&self) -> Result<Stats> {
        let root = self.root.as_deref();
        if is_red(root) {
            return err_at!(RedRoot, msg: "{}", self.config.name);
        }

        let mut walk = Walk {
            prev: None,
            entries: 0,
            depths: Depth::new(),
        };
        let blacks = self.validate_tree(root, false, 0, 0, &mut walk)?;
        if walk.entries != self.n_count {
            let (n, m) = (walk.entries, self.n_count);
            return err_at!(Fatal, msg: "mismatch in count {} != {}", n, m);
        }

        let mut stats = Stats::new(self.n_count, mem::size_of::<Node<T>>());
        stats.set_blacks(blacks);
        stats.set_depths(walk.depths);
        Ok(stats)
    }
}

type Upsert<T> = (Box<Node<T>>, Option<T>);

type Delete<T> = (Option<Box<Node<T>>>, Option<T>);

/// Write operations on Llrb instance.
///
/// Mutations fail only on a corrupt tree, refer to [`FaultPolicy`].
impl<T, F> Llrb<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Insert `item` into the tree. If an equivalent item is already
    /// present, replace it with `item` and return the old one.
    pub fn replace_or_insert(&mut self, item: T) -> Result<Option<T>> {
        let root = self.root.take();
        match Llrb::upsert(&self.less, root, item) {
            Ok((mut root, old_item)) => {
                root.set_black();
                self.root = Some(root);
                if old_item.is_none() {
                    self.n_count += 1;
                }
                Ok(old_item)
            }
            Err(err) => self.fault(err),
        }
    }

    /// Insert `item` into the tree. Equivalent items already present are
    /// kept, `item` is placed after all of them in sort order.
    pub fn insert_no_replace(&mut self, item: T) -> Result<()> {
        let root = self.root.take();
        match Llrb::insert(&self.less, root, item) {
            Ok(mut root) => {
                root.set_black();
                self.root = Some(root);
                self.n_count += 1;
                Ok(())
            }
            Err(err) => self.fault(err),
        }
    }

    /// Apply [`Llrb::replace_or_insert`] for each item, in order, stop
    /// at the first failure. Replaced items are dropped.
    pub fn replace_or_insert_bulk<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.replace_or_insert(item)?;
        }
        Ok(())
    }

    /// Apply [`Llrb::insert_no_replace`] for each item, in order, stop
    /// at the first failure.
    pub fn insert_no_replace_bulk<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.insert_no_replace(item)?;
        }
        Ok(())
    }

    /// Delete an item equivalent to `key` and return it. If there is
    /// no such item, then delete is a no-op and the tree structure is
    /// left untouched.
    pub fn delete(&mut self, key: &T) -> Result<Option<T>> {
        // the walk down recolors and rotates even when key is missing.
        if !self.has(key) {
            return Ok(None);
        }
        let root = self.root.take();
        let res = Llrb::do_delete(&self.less, root, key);
        self.finish_delete(res)
    }

    /// Delete the minimum item and return it.
    pub fn delete_min(&mut self) -> Result<Option<T>> {
        let res = do_delete_min(self.root.take());
        self.finish_delete(res)
    }

    /// Delete the maximum item and return it.
    pub fn delete_max(&mut self) -> Result<Option<T>> {
        let res = do_delete_max(self.root.take());
        self.finish_delete(res)
    }

    fn finish_delete(&mut self, res: Result<Delete<T>>) -> Result<Option<T>> {
        match res {
            Ok((root, old_item)) => {
                self.root = root.map(|mut root| {
                    root.set_black();
                    root
                });
                if old_item.is_some() {
                    self.n_count = match self.n_count.checked_sub(1) {
                        Some(n_count) => n_count,
                        None => {
                            let name = self.config.name.clone();
                            let err = Error::Fatal(
                                format!("{}:{}", file!(), line!()),
                                format!("{} count underflow on delete", name),
                            );
                            return self.fault(err);
                        }
                    };
                }
                Ok(old_item)
            }
            Err(err) => self.fault(err),
        }
    }

    // the graph was consumed by the failed mutation, what is left of it
    // is dropped.
    fn fault<R>(&mut self, err: Error) -> Result<R> {
        error!("{} tree reset after fault: {}", self.config.name, err);
        self.root = None;
        self.n_count = 0;
        match self.config.fault_policy {
            FaultPolicy::Panic => panic!("{}", err),
            FaultPolicy::Propagate => Err(err),
        }
    }
}

/// Read operations on Llrb instance.
impl<T, F> Llrb<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Get the item equivalent to `key`. The stored item is returned,
    /// it may differ from `key` in fields the comparator ignores.
    pub fn get(&self, key: &T) -> Option<&T> {
        let mut node = self.root.as_deref();
        while let Some(nref) = node {
            node = if (self.less)(key, &nref.item) {
                nref.left()
            } else if (self.less)(&nref.item, key) {
                nref.right()
            } else {
                return Some(&nref.item);
            };
        }
        None
    }

    /// Return whether an item equivalent to `key` is present.
    pub fn has(&self, key: &T) -> bool {
        self.get(key).is_some()
    }

    /// Return the minimum item.
    pub fn min(&self) -> Option<&T> {
        let mut nref = self.root.as_deref()?;
        while let Some(left) = nref.left() {
            nref = left;
        }
        Some(&nref.item)
    }

    /// Return the maximum item.
    pub fn max(&self) -> Option<&T> {
        let mut nref = self.root.as_deref()?;
        while let Some(right) = nref.right() {
            nref = right;
        }
        Some(&nref.item)
    }

    /// Return a random item from this tree.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<&T> {
        let mut nref = self.root.as_deref()?;

        let mut at_depth = rng.gen::<u8>() % 40;
        loop {
            let next = match rng.gen::<u8>() % 2 {
                0 => nref.left(),
                _ => nref.right(),
            };
            match next {
                Some(next) if at_depth > 0 => {
                    at_depth -= 1;
                    nref = next;
                }
                _ => break Some(&nref.item),
            }
        }
    }
}

impl<T, F> Llrb<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn upsert(less: &F, node: Option<Box<Node<T>>>, item: T) -> Result<Upsert<T>> {
        let mut node = match node {
            None => return Ok((Node::new(item, false /*black*/), None)),
            Some(node) => node,
        };

        let old_item = if less(&item, &node.item) {
            let (left, o) = Llrb::upsert(less, node.left.take(), item)?;
            node.left = Some(left);
            o
        } else if less(&node.item, &item) {
            let (right, o) = Llrb::upsert(less, node.right.take(), item)?;
            node.right = Some(right);
            o
        } else {
            Some(mem::replace(&mut node.item, item))
        };

        Ok((fixup(node)?, old_item))
    }

    fn insert(less: &F, node: Option<Box<Node<T>>>, item: T) -> Result<Box<Node<T>>> {
        let mut node = match node {
            None => return Ok(Node::new(item, false /*black*/)),
            Some(node) => node,
        };

        if less(&item, &node.item) {
            node.left = Some(Llrb::insert(less, node.left.take(), item)?);
        } else {
            node.right = Some(Llrb::insert(less, node.right.take(), item)?);
        }

        fixup(node)
    }

    fn do_delete(less: &F, node: Option<Box<Node<T>>>, key: &T) -> Result<Delete<T>> {
        let mut node = match node {
            None => return Ok((None, None)),
            Some(node) => node,
        };

        if less(key, &node.item) {
            if node.left.is_none() {
                return Ok((Some(node), None));
            }
            let left = node.left();
            if !is_red(left) && !is_red(left.and_then(|l| l.left())) {
                node = move_red_left(node)?;
            }
            let (left, old_item) = Llrb::do_delete(less, node.left.take(), key)?;
            node.left = left;
            return Ok((Some(fixup(node)?), old_item));
        }

        if is_red(node.left()) {
            node = rotate_right(node)?;
        }

        if !less(&node.item, key) && node.right.is_none() {
            return Ok((None, Some(node.into_item())));
        }

        // when move_red_right rotates, node is the old left child and the
        // compared node sits under node.right, even if both are equivalent.
        let mut rotated = false;
        let right = node.right();
        if right.is_some() && !is_red(right) && !is_red(right.and_then(|r| r.left())) {
            let (n, r) = move_red_right(node)?;
            node = n;
            rotated = r;
        }

        if !rotated && !less(&node.item, key) {
            // node == key, substitute with in-order successor.
            let (right, successor) = do_delete_min(node.right.take())?;
            node.right = right;
            let old_item = match successor {
                Some(item) => mem::replace(&mut node.item, item),
                None => {
                    let shape = node.shape();
                    return err_at!(Fatal, msg: "do_delete(): no successor {}", shape);
                }
            };
            Ok((Some(fixup(node)?), Some(old_item)))
        } else {
            let (right, old_item) = Llrb::do_delete(less, node.right.take(), key)?;
            node.right = right;
            Ok((Some(fixup(node)?), old_item))
        }
    }

    fn validate_tree<'a>(
        &self,
        node: Option<&'a Node<T>>,
        fromred: bool,
        mut nb: usize,
        depth: usize,
        walk: &mut Walk<'a, T>,
    ) -> Result<usize> {
        let node = match node {
            None => {
                walk.depths.sample(depth);
                return Ok(nb);
            }
            Some(node) => node,
        };

        let red = !node.is_black();
        if fromred && red {
            return err_at!(ConsecutiveReds, msg: "at depth {}", depth);
        }
        if is_red(node.right()) {
            return err_at!(RightLeaning, msg: "at depth {}", depth);
        }
        if !red {
            nb += 1;
        }

        let lblacks = self.validate_tree(node.left(), red, nb, depth + 1, walk)?;
        if let Some(prev) = walk.prev {
            if (self.less)(&node.item, prev) {
                return err_at!(SortError, msg: "item at depth {} precedes its predecessor", depth);
            }
        }
        walk.prev = Some(&node.item);
        walk.entries += 1;
        let rblacks = self.validate_tree(node.right(), red, nb, depth + 1, walk)?;

        if lblacks != rblacks {
            let (l, r) = (lblacks, rblacks);
            return err_at!(UnbalancedBlacks, msg: "left: {} right: {} depth: {}", l, r, depth);
        }
        Ok(lblacks)
    }
}

fn do_delete_min<T>(node: Option<Box<Node<T>>>) -> Result<Delete<T>> {
    let mut node = match node {
        None => return Ok((None, None)),
        Some(node) => node,
    };
    if node.left.is_none() {
        return Ok((None, Some(node.into_item())));
    }

    let left = node.left();
    if !is_red(left) && !is_red(left.and_then(|l| l.left())) {
        node = move_red_left(node)?;
    }
    let (left, old_item) = do_delete_min(node.left.take())?;
    node.left = left;
    Ok((Some(fixup(node)?), old_item))
}

fn do_delete_max<T>(node: Option<Box<Node<T>>>) -> Result<Delete<T>> {
    let mut node = match node {
        None => return Ok((None, None)),
        Some(node) => node,
    };
    if is_red(node.left()) {
        node = rotate_right(node)?;
    }
    if node.right.is_none() {
        return Ok((None, Some(node.into_item())));
    }

    let right = node.right();
    if !is_red(right) && !is_red(right.and_then(|r| r.left())) {
        node = move_red_right(node)?.0;
    }
    let (right, old_item) = do_delete_max(node.right.take())?;
    node.right = right;
    Ok((Some(fixup(node)?), old_item))
}

//--------- rotation routines for 2-3 algorithm ----------------

fn fixup<T>(mut node: Box<Node<T>>) -> Result<Box<Node<T>>> {
    if is_red(node.right()) && !is_red(node.left()) {
        node = rotate_left(node)?;
    }
    let left = node.left();
    if is_red(left) && is_red(left.and_then(|l| l.left())) {
        node = rotate_right(node)?;
    }
    if is_red(node.left()) && is_red(node.right()) {
        flip(node.deref_mut())?;
    }
    Ok(node)
}

//              (i)                       (i)
//               |                         |
//              node                       x
//              /  \                      / \
//             /    (r)                 (r)  \
//            /       \                 /     \
//          left       x             node      xr
//                    / \            /  \
//                  xl   xr       left   xl
//
fn rotate_left<T>(mut node: Box<Node<T>>) -> Result<Box<Node<T>>> {
    let mut x = match node.right.take() {
        Some(x) if !x.is_black() => x,
        right => {
            node.right = right;
            let shape = node.shape();
            return err_at!(Fatal, msg: "rotate_left(): rotating a black link {}", shape);
        }
    };
    node.right = x.left.take();
    x.black = node.black;
    node.set_red();
    x.left = Some(node);
    Ok(x)
}

//              (i)                       (i)
//               |                         |
//              node                       x
//              /  \                      / \
//            (r)   \                   (r)  \
//           /       \                 /      \
//          x       right             xl      node
//         / \                                / \
//       xl   xr                             xr  right
//
fn rotate_right<T>(mut node: Box<Node<T>>) -> Result<Box<Node<T>>> {
    let mut x = match node.left.take() {
        Some(x) if !x.is_black() => x,
        left => {
            node.left = left;
            let shape = node.shape();
            return err_at!(Fatal, msg: "rotate_right(): rotating a black link {}", shape);
        }
    };
    node.left = x.right.take();
    x.black = node.black;
    node.set_red();
    x.right = Some(node);
    Ok(x)
}

//        (x)                   (!x)
//         |                     |
//        node                  node
//        / \                   / \
//      (y) (z)              (!y) (!z)
//     /      \              /      \
//   left    right         left    right
//
fn flip<T>(node: &mut Node<T>) -> Result<()> {
    if node.left.is_none() || node.right.is_none() {
        let shape = node.shape();
        return err_at!(Fatal, msg: "flip(): missing child {}", shape);
    }
    if let Some(left) = node.left.as_mut() {
        left.toggle_link();
    }
    if let Some(right) = node.right.as_mut() {
        right.toggle_link();
    }
    node.toggle_link();
    Ok(())
}

fn move_red_left<T>(mut node: Box<Node<T>>) -> Result<Box<Node<T>>> {
    flip(node.deref_mut())?;
    if is_red(node.right().and_then(|r| r.left())) {
        node.right = node.right.take().map(rotate_right).transpose()?;
        node = rotate_left(node)?;
        flip(node.deref_mut())?;
    }
    Ok(node)
}

// also return whether the left child was rotated up into node's place.
fn move_red_right<T>(mut node: Box<Node<T>>) -> Result<(Box<Node<T>>, bool)> {
    flip(node.deref_mut())?;
    if is_red(node.left().and_then(|l| l.left())) {
        node = rotate_right(node)?;
        flip(node.deref_mut())?;
        return Ok((node, true));
    }
    Ok((node, false))
}

struct Walk<'a, T> {
    prev: Option<&'a T>,
    entries: usize,
    depths: Depth,
}

#[inline]
fn is_red<T>(node: Option<&Node<T>>) -> bool {
    node.map_or(false, |node| !node.is_black())
}

/// Statistics on [`Llrb`] tree. Serves two purpose:
///
/// * To get partial but quick statistics via [`Llrb::stats`] method.
/// * To get full statisics via [`Llrb::validate`] method.
#[derive(Default, Debug)]
pub struct Stats {
    entries: usize, // number of items in the tree.
    node_size: usize,
    blacks: Option<usize>,
    depths: Option<Depth>,
}

impl Stats {
    fn new(entries: usize, node_size: usize) -> Stats {
        Stats {
            entries,
            node_size,
            blacks: Default::default(),
            depths: Default::default(),
        }
    }

    #[inline]
    fn set_blacks(&mut self, blacks: usize) {
        self.blacks = Some(blacks)
    }

    #[inline]
    fn set_depths(&mut self, depths: Depth) {
        self.depths = Some(depths)
    }

    /// Return number of items in [`Llrb`] instance.
    #[inline]
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Return node-size, including over-head for `Llrb<T, F>`. Although
    /// the node overhead is constant, the node size varies based on
    /// item type. EG:
    ///
    /// ```
    /// use llrb_tree::{natural::ascending, Llrb};
    /// let llrb: Llrb<u64, _> = Llrb::new(ascending);
    ///
    /// // size of item: 8 bytes
    /// // overhead is 24 bytes, two child pointers and padded color bit
    /// assert_eq!(llrb.stats().node_size(), 32);
    /// ```
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Return number of black links from root to leaf, on both left
    /// and right child.
    #[inline]
    pub fn blacks(&self) -> Option<usize> {
        self.blacks
    }

    /// Return [`Depth`] statistics.
    pub fn depths(&self) -> Option<Depth> {
        self.depths.as_ref().filter(|d| d.samples() > 0).cloned()
    }
}

#[cfg(test)]
#[path = "llrb_test.rs"]
mod llrb_test;
