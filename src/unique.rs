//! Owning handles.

use crate::{gl::types::GLuint, object::Kind, Id};

/// Sole owner of a GL object of kind `K`, or null.
///
/// The object is deleted exactly once: by [`Self::reset`], by [`Self::replace`], or when
/// the owner is dropped. Ownership can be handed back out as a plain [`Id`] with
/// [`Self::extract`] or [`Self::into_id`], after which nothing is deleted on drop.
///
/// Dereferences to the held [`Id`], so binding and parameter queries are available
/// directly on the owner.
///
/// Owners are neither `Send` nor `Sync`, as they must be dropped on the thread their
/// context is current on.
#[must_use = "dropping an owner deletes the object"]
pub struct Unique<K: Kind> {
    id: Id<K>,
    _not_send: std::marker::PhantomData<*const ()>,
}

impl<K: Kind> Unique<K> {
    /// An owner of nothing.
    pub const fn null() -> Self {
        Self {
            id: Id::null(),
            _not_send: std::marker::PhantomData,
        }
    }
    /// Take ownership of the object named by `id`.
    ///
    /// # Panics
    /// With the `validate` feature, if `id` is not null and not an object of kind `K`.
    pub fn new(id: Id<K>) -> Self {
        #[cfg(feature = "validate")]
        id.validate();
        Self {
            id,
            _not_send: std::marker::PhantomData,
        }
    }
    /// Create a new object and take ownership of it.
    pub fn create(args: K::Create) -> Self {
        let id = Id::create(args);
        log::trace!("created {id:?}");
        Self::new(id)
    }
    /// The name of the owned object. The owner keeps ownership.
    #[must_use]
    pub fn id(&self) -> Id<K> {
        self.id
    }
    /// The raw name of the owned object.
    #[must_use]
    pub fn get(&self) -> GLuint {
        self.id.get()
    }
    #[must_use]
    pub fn good(&self) -> bool {
        self.id.good()
    }
    /// Give up ownership without deleting the object.
    ///
    /// The object leaks unless its name was copied out beforehand.
    pub fn release(&mut self) {
        self.id.release();
    }
    /// Give up ownership, returning the name of the object. The owner becomes null.
    #[must_use = "dropping a gl handle leaks resources"]
    pub fn extract(&mut self) -> Id<K> {
        self.id.extract()
    }
    /// Consume the owner, returning the name of the object without deleting it.
    #[must_use = "dropping a gl handle leaks resources"]
    pub fn into_id(mut self) -> Id<K> {
        self.extract()
    }
    /// Delete the owned object now. The owner becomes null.
    pub fn reset(&mut self) {
        if self.id.good() {
            log::trace!("destroying {:?}", self.id);
            self.id.destroy();
        }
    }
    /// Delete the owned object, then take ownership of `id`.
    ///
    /// Replacing an object with itself does nothing.
    pub fn replace(&mut self, id: Id<K>) {
        if id == self.id {
            return;
        }
        self.reset();
        *self = Self::new(id);
    }
}

impl<K: Kind> Drop for Unique<K> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<K: Kind> Default for Unique<K> {
    fn default() -> Self {
        Self::null()
    }
}

impl<K: Kind> std::ops::Deref for Unique<K> {
    type Target = Id<K>;
    fn deref(&self) -> &Id<K> {
        &self.id
    }
}

impl<K: Kind> From<Unique<K>> for Id<K> {
    fn from(value: Unique<K>) -> Self {
        value.into_id()
    }
}

impl<K: Kind> std::fmt::Debug for Unique<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Unique").field(&self.id).finish()
    }
}

impl<K: Kind> PartialEq for Unique<K> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl<K: Kind> Eq for Unique<K> {}
impl<K: Kind> PartialEq<Id<K>> for Unique<K> {
    fn eq(&self, other: &Id<K>) -> bool {
        self.id == *other
    }
}
impl<K: Kind> PartialEq<Unique<K>> for Id<K> {
    fn eq(&self, other: &Unique<K>) -> bool {
        *self == other.id
    }
}
impl<K: Kind> PartialOrd for Unique<K> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl<K: Kind> Ord for Unique<K> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}
impl<K: Kind> PartialOrd<Id<K>> for Unique<K> {
    fn partial_cmp(&self, other: &Id<K>) -> Option<std::cmp::Ordering> {
        self.id.partial_cmp(other)
    }
}
impl<K: Kind> PartialOrd<Unique<K>> for Id<K> {
    fn partial_cmp(&self, other: &Unique<K>) -> Option<std::cmp::Ordering> {
        self.partial_cmp(&other.id)
    }
}

pub type UniqueShader = Unique<crate::object::Shader>;
pub type UniqueProgram = Unique<crate::object::Program>;
pub type UniqueVertexArray = Unique<crate::object::VertexArray>;
pub type UniqueBuffer = Unique<crate::object::Buffer>;
pub type UniqueProgramPipeline = Unique<crate::object::ProgramPipeline>;
pub type UniqueTexture = Unique<crate::object::Texture>;
