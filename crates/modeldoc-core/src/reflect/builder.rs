//! Fluent construction of [`TypeInfo`] descriptions
//!
//! Copyright (c) 2025 Modeldoc Team
//! Licensed under the Apache-2.0 license

use super::{Attribute, Constructor, MethodInfo, PropertyInfo, TypeInfo};
use crate::error::ReflectError;
use std::marker::PhantomData;

/// Builder for [`TypeInfo`].
///
/// `T` is the described Rust type, or `()` for types that only exist as a
/// description (manifests, generated tables).
///
/// ```rust
/// use modeldoc_core::reflect::{Attribute, PropertyInfo, TypeInfo};
///
/// #[derive(Default)]
/// struct Person {
///     name: String,
///     is_active: bool,
/// }
///
/// let info = TypeInfo::builder::<Person>("Person")
///     .default_constructor()
///     .property(
///         PropertyInfo::of("Name", |p: &Person| p.name.clone())
///             .attribute(Attribute::display_name("Full name")),
///     )
///     .property(PropertyInfo::of("IsActive", |p: &Person| p.is_active))
///     .build();
///
/// assert_eq!(info.properties.len(), 2);
/// ```
pub struct TypeInfoBuilder<T = ()> {
    info: TypeInfo,
    _marker: PhantomData<fn() -> T>,
}

impl<T> TypeInfoBuilder<T> {
    pub(crate) fn new(name: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            info: TypeInfo {
                name: name.into(),
                full_name: full_name.into(),
                attributes: Vec::new(),
                properties: Vec::new(),
                methods: Vec::new(),
                constructor: None,
            },
            _marker: PhantomData,
        }
    }

    /// Override the fully qualified name used for XML documentation keys
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.info.full_name = full_name.into();
        self
    }

    /// Attach a type-level attribute
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.info.attributes.push(attribute);
        self
    }

    /// Set the zero-argument constructor
    pub fn constructor(mut self, constructor: Constructor) -> Self {
        self.info.constructor = Some(constructor);
        self
    }

    /// Append a property
    pub fn property(mut self, property: PropertyInfo) -> Self {
        self.info.properties.push(property);
        self
    }

    /// Append a method
    pub fn method(mut self, method: MethodInfo) -> Self {
        self.info.methods.push(method);
        self
    }

    /// Finish the description
    pub fn build(self) -> TypeInfo {
        self.info
    }
}

impl<T> TypeInfoBuilder<T>
where
    T: Send + 'static,
{
    /// Construct samples through a fallible factory
    pub fn factory<F>(self, factory: F) -> Self
    where
        F: Fn() -> Result<T, ReflectError> + Send + Sync + 'static,
    {
        self.constructor(Constructor::fallible(factory))
    }
}

impl<T> TypeInfoBuilder<T>
where
    T: Default + Send + 'static,
{
    /// Construct samples with `T::default()`
    pub fn default_constructor(self) -> Self {
        self.constructor(Constructor::from_default::<T>())
    }
}
