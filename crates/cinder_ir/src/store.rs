use core::marker::PhantomData;

/// Typed index into a [`Store`].
///
/// The phantom parameter ties an id to the store it came from, so a
/// `BlockId` can never be used to address a temp and vice versa.
#[repr(transparent)]
pub struct Id<T>(u32, PhantomData<fn() -> T>);

impl<T> Id<T> {
  pub fn new(index: u32) -> Self {
    Self(index, PhantomData)
  }

  pub fn index(&self) -> u32 {
    self.0
  }
}

// Manual impls: the derives would bound `T`, but an id is a plain u32
// regardless of what it points to.
impl<T> Copy for Id<T> {}

impl<T> Clone for Id<T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T> PartialEq for Id<T> {
  fn eq(
    &self,
    other: &Self,
  ) -> bool {
    self.0 == other.0
  }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
  fn hash<H: std::hash::Hasher>(
    &self,
    state: &mut H,
  ) {
    self.0.hash(state);
  }
}

impl<T> std::fmt::Debug for Id<T> {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    write!(f, "Id({})", self.0)
  }
}

/// Append-only arena. Entities are addressed by [`Id`] and are never
/// removed, so ids stay valid for the lifetime of the store.
#[derive(Debug, Clone)]
pub struct Store<T> {
  data: Vec<T>,
}

impl<T> Store<T> {
  pub fn new() -> Self {
    Self { data: Vec::new() }
  }

  pub fn alloc(
    &mut self,
    v: T,
  ) -> Id<T> {
    let id = Id::new(self.data.len() as u32);
    self.data.push(v);
    id
  }

  pub fn get(
    &self,
    id: &Id<T>,
  ) -> &T {
    &self.data[id.0 as usize]
  }

  pub fn get_mut(
    &mut self,
    id: &Id<T>,
  ) -> &mut T {
    &mut self.data[id.0 as usize]
  }

  pub fn get_all(&self) -> &[T] {
    &self.data
  }

  pub fn len(&self) -> usize {
    self.data.len()
  }

  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  /// Iterate entries in allocation order together with their ids.
  pub fn iter(&self) -> impl Iterator<Item = (Id<T>, &T)> {
    self
      .data
      .iter()
      .enumerate()
      .map(|(index, value)| (Id::new(index as u32), value))
  }
}

impl<T> Default for Store<T> {
  fn default() -> Self {
    Self::new()
  }
}
