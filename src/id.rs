//! Non-owning, strongly-typed object names.

use crate::{
    gl::types::{GLint, GLuint},
    object::{
        Bind, BoundParameters, IsBound, Kind, ParameterName, Parameters, MAX_PARAMETER_VALUES,
    },
    Error, Result,
};

/// The name of a GL object of kind `K`, or null.
///
/// An `Id` owns nothing: copying it does not copy the object, and dropping it does not
/// delete it. See [`Unique`](crate::Unique) for an owning handle.
#[repr(transparent)]
pub struct Id<K: Kind>(GLuint, std::marker::PhantomData<K>);

impl<K: Kind> Id<K> {
    /// The null name.
    #[must_use]
    pub const fn null() -> Self {
        Self(K::NULL, std::marker::PhantomData)
    }
    /// Wrap a raw name.
    ///
    /// With the `validate` feature, a non-null `name` is checked to be an object of kind `K`.
    ///
    /// # Panics
    /// With the `validate` feature, if `name` is not null and not an object of kind `K`.
    #[must_use]
    pub fn from_raw(name: GLuint) -> Self {
        let id = Self(name, std::marker::PhantomData);
        #[cfg(feature = "validate")]
        id.validate();
        id
    }
    #[cfg(feature = "validate")]
    pub(crate) fn validate(self) {
        assert!(
            self.is_null() || K::check(self.0),
            "{} is not a {:?} object",
            self.0,
            K::TYPE
        );
    }
    /// Create a new object, and return its name without taking ownership of it.
    ///
    /// The object must be destroyed with [`Self::destroy`], or handed to an owner
    /// with [`Unique::new`](crate::Unique::new).
    #[must_use = "dropping a gl handle leaks resources"]
    pub fn create(args: K::Create) -> Self {
        Self::from_raw(K::create(args))
    }
    /// Raw name of the object.
    #[must_use]
    pub const fn get(self) -> GLuint {
        self.0
    }
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == K::NULL
    }
    /// Inverse of [`Self::is_null`].
    #[must_use]
    pub const fn good(self) -> bool {
        !self.is_null()
    }
    /// Make this id null. The object it named, if any, is not touched.
    pub fn release(&mut self) {
        *self = Self::null();
    }
    /// Make this id null, returning the name it held.
    #[must_use]
    pub fn extract(&mut self) -> Self {
        std::mem::replace(self, Self::null())
    }
    /// Delete the named object, and make this id null.
    pub fn destroy(&mut self) {
        K::destroy(self.extract().0);
    }
    /// Ask the GL whether this names a live object of kind `K`.
    #[must_use]
    pub fn check(self) -> bool {
        K::check(self.0)
    }
}

impl<K: Bind<Target = ()>> Id<K> {
    /// Bind this object to its one binding point.
    pub fn bind(self) {
        K::bind(self.0, ());
    }
    /// Bind null to the binding point of `K`.
    pub fn unbind() {
        K::bind(K::NULL, ());
    }
}

impl<K: Bind> Id<K> {
    /// Bind this object to `target`.
    pub fn bind_to(self, target: K::Target) {
        K::bind(self.0, target);
    }
    /// Bind null to `target`.
    pub fn unbind_from(target: K::Target) {
        K::bind(K::NULL, target);
    }
}

impl<K: IsBound> Id<K> {
    /// Whether this object is the one currently bound.
    #[must_use]
    pub fn is_bound(self) -> bool {
        K::is_bound(self.0)
    }
}

/// Check that `out` has room for every value the GL writes for `param`.
fn check_output(param: impl ParameterName, out: &[GLint]) -> Result<()> {
    if out.is_empty() {
        Err(Error::EmptyOutput)
    } else if out.len() < param.values() {
        Err(Error::InvalidArgument(
            "output slice is shorter than the parameter",
        ))
    } else {
        Ok(())
    }
}

impl<K: Parameters> Id<K> {
    /// Read a single-valued parameter.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `param` has more than one value. Read those with
    /// [`Self::parameters`].
    pub fn parameter(self, param: K::Parameter) -> Result<GLint> {
        if param.values() != 1 {
            return Err(Error::InvalidArgument("parameter has more than one value"));
        }
        Ok(self.value(param))
    }
    /// The first value of `param`.
    pub(crate) fn value(self, param: K::Parameter) -> GLint {
        let mut values = [0; MAX_PARAMETER_VALUES];
        // Safety: no parameter writes more than MAX_PARAMETER_VALUES integers.
        unsafe { K::parameters(self.0, param, &mut values) };
        values[0]
    }
    /// Read a parameter into `out`, which must be long enough to hold every value of it.
    ///
    /// # Errors
    /// [`Error::EmptyOutput`] if `out` is empty, [`Error::InvalidArgument`] if it is
    /// shorter than [`ParameterName::values`].
    pub fn parameters(self, param: K::Parameter, out: &mut [GLint]) -> Result<()> {
        check_output(param, out)?;
        // Safety: checked above.
        unsafe { K::parameters(self.0, param, out) };
        Ok(())
    }
}

impl<K: BoundParameters> Id<K> {
    /// Read a parameter of whatever object is bound to `target`.
    ///
    /// # Errors
    /// As [`Self::parameters`].
    pub fn bound_parameters(
        target: K::Target,
        param: K::Parameter,
        out: &mut [GLint],
    ) -> Result<()> {
        check_output(param, out)?;
        // Safety: checked above.
        unsafe { K::bound_parameters(target, param, out) };
        Ok(())
    }
}

impl<K: Kind> Default for Id<K> {
    fn default() -> Self {
        Self::null()
    }
}
impl<K: Kind> Clone for Id<K> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<K: Kind> Copy for Id<K> {}
impl<K: Kind> PartialEq for Id<K> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<K: Kind> Eq for Id<K> {}
impl<K: Kind> PartialOrd for Id<K> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl<K: Kind> Ord for Id<K> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}
impl<K: Kind> std::hash::Hash for Id<K> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
impl<K: Kind> std::fmt::Debug for Id<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({})", K::TYPE, self.0)
    }
}
impl<K: Kind> From<Id<K>> for GLuint {
    fn from(value: Id<K>) -> Self {
        value.0
    }
}

pub type ShaderId = Id<crate::object::Shader>;
pub type ProgramId = Id<crate::object::Program>;
pub type VertexArrayId = Id<crate::object::VertexArray>;
pub type BufferId = Id<crate::object::Buffer>;
pub type ProgramPipelineId = Id<crate::object::ProgramPipeline>;
pub type TextureId = Id<crate::object::Texture>;
