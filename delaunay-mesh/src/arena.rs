use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

#[derive(Debug)]
pub struct Arena<T> {
    data: Vec<T>,
}

#[derive(Debug)]
pub struct ArenaId<Tag> {
    ix: usize,
    tag: std::marker::PhantomData<Tag>,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Arena { data: vec![] }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn push(&mut self, v: T) -> ArenaId<T> {
        self.data.push(v);
        ArenaId::new(self.data.len() - 1)
    }

    pub fn replace(&mut self, id: ArenaId<T>, mut v: T) -> T {
        std::mem::swap(&mut self[id], &mut v);
        v
    }

    pub fn get(&self, id: ArenaId<T>) -> Option<&T> {
        self.data.get(id.ix)
    }

    pub fn get_mut(&mut self, id: ArenaId<T>) -> Option<&mut T> {
        self.data.get_mut(id.ix)
    }

    /// Iterate over the elements in insertion order along with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (ArenaId<T>, &T)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(|(ix, v)| (ArenaId::new(ix), v))
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Arena::new()
    }
}

impl<T> Index<ArenaId<T>> for Arena<T> {
    type Output = T;

    fn index(&self, ix: ArenaId<T>) -> &Self::Output {
        &self.data[ix.ix]
    }
}

impl<T> IndexMut<ArenaId<T>> for Arena<T> {
    fn index_mut(&mut self, ix: ArenaId<T>) -> &mut T {
        &mut self.data[ix.ix]
    }
}

impl<Tag> ArenaId<Tag> {
    fn new(ix: usize) -> Self {
        ArenaId {
            ix,
            tag: PhantomData,
        }
    }

    pub fn index(self) -> usize {
        self.ix
    }
}

impl<T> Copy for ArenaId<T> {}
impl<T> Clone for ArenaId<T> {
    fn clone(&self) -> Self {
        ArenaId {
            ix: self.ix,
            tag: self.tag,
        }
    }
}

impl<T> PartialEq for ArenaId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ix == other.ix
    }
}
impl<T> Eq for ArenaId<T> {}

impl<T> std::hash::Hash for ArenaId<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.ix.hash(state);
    }
}
