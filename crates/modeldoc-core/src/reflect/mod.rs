//! Type introspection capability
//!
//! Rust has no runtime reflection, so every documented type describes itself
//! through [`Reflect`]. The description lists public properties and methods in
//! declaration order together with their attached [`Attribute`]s, and may carry
//! a zero-argument [`Constructor`] plus per-property [`Getter`]s used to read
//! sample default values.
//!
//! Copyright (c) 2025 Modeldoc Team
//! Licensed under the Apache-2.0 license

pub mod attribute;
pub mod builder;

pub use attribute::{kinds, Attribute, AttributeArg};
pub use builder::TypeInfoBuilder;

use crate::error::ReflectError;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A type that can describe its own public shape
pub trait Reflect {
    /// Static description of the type
    fn type_info() -> TypeInfo;
}

/// A freshly constructed instance, inspected through [`Getter`]s
pub type Instance = Box<dyn Any + Send>;

type ConstructFn = dyn Fn() -> Result<Instance, ReflectError> + Send + Sync;
type GetterFn = dyn Fn(&dyn Any) -> Result<PropertyValue, ReflectError> + Send + Sync;

/// Zero-argument constructor of a described type
#[derive(Clone)]
pub struct Constructor(Arc<ConstructFn>);

impl Constructor {
    /// Wrap a raw constructor closure
    pub fn new<F>(construct: F) -> Self
    where
        F: Fn() -> Result<Instance, ReflectError> + Send + Sync + 'static,
    {
        Self(Arc::new(construct))
    }

    /// Constructor backed by `T::default()`
    pub fn from_default<T>() -> Self
    where
        T: Default + Send + 'static,
    {
        Self::new(|| Ok(Box::new(T::default()) as Instance))
    }

    /// Constructor backed by a fallible factory
    pub fn fallible<T, F>(factory: F) -> Self
    where
        T: Send + 'static,
        F: Fn() -> Result<T, ReflectError> + Send + Sync + 'static,
    {
        Self::new(move || factory().map(|value| Box::new(value) as Instance))
    }

    /// Build a new instance
    pub fn construct(&self) -> Result<Instance, ReflectError> {
        (self.0)()
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Constructor(..)")
    }
}

/// Reads one property's value off an [`Instance`]
#[derive(Clone)]
pub struct Getter(Arc<GetterFn>);

impl Getter {
    /// Wrap a raw getter working on untyped instances
    pub fn new<F>(get: F) -> Self
    where
        F: Fn(&dyn Any) -> Result<PropertyValue, ReflectError> + Send + Sync + 'static,
    {
        Self(Arc::new(get))
    }

    /// Getter reading a field of a concrete type
    pub fn of<T, V, F>(get: F) -> Self
    where
        T: 'static,
        V: Into<PropertyValue>,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        Self::try_of(move |instance: &T| Ok(get(instance).into()))
    }

    /// Getter that may fail, like a throwing property accessor
    pub fn try_of<T, F>(get: F) -> Self
    where
        T: 'static,
        F: Fn(&T) -> Result<PropertyValue, ReflectError> + Send + Sync + 'static,
    {
        Self::new(move |instance: &dyn Any| match instance.downcast_ref::<T>() {
            Some(typed) => get(typed),
            None => Err(ReflectError::InstanceMismatch {
                expected: short_type_name::<T>(),
            }),
        })
    }

    /// Read the value off `instance`
    pub fn read(&self, instance: &dyn Any) -> Result<PropertyValue, ReflectError> {
        (self.0)(instance)
    }
}

impl fmt::Debug for Getter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Getter(..)")
    }
}

/// Value held by a property on a sample instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// No value
    Null,
    /// Text, rendered quoted
    Text(String),
    /// Boolean, rendered as `true`/`false`
    Bool(bool),
    /// Anything else, already in its natural text form
    Other(String),
}

impl PropertyValue {
    /// Value rendered through `Display`
    pub fn display(value: impl fmt::Display) -> Self {
        Self::Other(value.to_string())
    }

    /// Value rendered through `Debug`, for collections and the like
    pub fn debug(value: impl fmt::Debug) -> Self {
        Self::Other(format!("{:?}", value))
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for PropertyValue {
    fn from(value: char) -> Self {
        Self::Other(value.to_string())
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

macro_rules! display_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PropertyValue {
                fn from(value: $ty) -> Self {
                    Self::Other(value.to_string())
                }
            }
        )*
    };
}

display_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// One declared property of a type
#[derive(Debug, Clone)]
pub struct PropertyInfo {
    /// Identifier as declared
    pub name: String,
    /// Short name of the declared type
    pub type_label: String,
    /// Attached metadata, in declaration order
    pub attributes: Vec<Attribute>,
    pub is_public: bool,
    pub is_static: bool,
    /// Accessor used to read the sample default value
    pub getter: Option<Getter>,
}

impl PropertyInfo {
    /// Public instance property without a getter
    pub fn new(name: impl Into<String>, type_label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_label: type_label.into(),
            attributes: Vec::new(),
            is_public: true,
            is_static: false,
            getter: None,
        }
    }

    /// Public instance property of `T`, typed by the getter's return type
    pub fn of<T, V, F>(name: impl Into<String>, get: F) -> Self
    where
        T: 'static,
        V: Into<PropertyValue> + 'static,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        Self::new(name, short_type_name::<V>()).getter(Getter::of(get))
    }

    /// Attach an attribute
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Set the getter
    pub fn getter(mut self, getter: Getter) -> Self {
        self.getter = Some(getter);
        self
    }

    /// Mark as non-public
    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// Mark as static (type-level)
    pub fn shared(mut self) -> Self {
        self.is_static = true;
        self
    }
}

/// One declared method parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterInfo {
    pub name: String,
    pub type_label: String,
    /// Whether the parameter declares a default value
    pub has_default: bool,
}

impl ParameterInfo {
    /// Parameter without a default value
    pub fn new(name: impl Into<String>, type_label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_label: type_label.into(),
            has_default: false,
        }
    }

    /// Parameter of type `T`
    pub fn of<T: ?Sized>(name: impl Into<String>) -> Self {
        Self::new(name, short_type_name::<T>())
    }

    /// Mark the parameter as having a default value
    pub fn optional(mut self) -> Self {
        self.has_default = true;
        self
    }
}

/// One declared method of a controller-like type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodInfo {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub parameters: Vec<ParameterInfo>,
    pub is_public: bool,
    pub is_static: bool,
    /// Declared on a parent type rather than this one
    pub inherited: bool,
}

impl MethodInfo {
    /// Public instance method declared directly on the type
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            parameters: Vec::new(),
            is_public: true,
            is_static: false,
            inherited: false,
        }
    }

    /// Attach an attribute
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Append a parameter
    pub fn parameter(mut self, parameter: ParameterInfo) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Mark as non-public
    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// Mark as static (type-level)
    pub fn shared(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark as inherited from a parent type
    pub fn inherited(mut self) -> Self {
        self.inherited = true;
        self
    }
}

/// Static description of a model or controller-like type
#[derive(Debug, Clone)]
pub struct TypeInfo {
    /// Simple name, e.g. `Person`
    pub name: String,
    /// Fully qualified name used for XML documentation keys
    pub full_name: String,
    /// Type-level metadata
    pub attributes: Vec<Attribute>,
    /// Properties in declaration order
    pub properties: Vec<PropertyInfo>,
    /// Methods in declaration order
    pub methods: Vec<MethodInfo>,
    /// Zero-argument constructor, if the type has one
    pub constructor: Option<Constructor>,
}

impl TypeInfo {
    /// Start describing the Rust type `T`
    pub fn builder<T: 'static>(name: impl Into<String>) -> TypeInfoBuilder<T> {
        TypeInfoBuilder::new(name, std::any::type_name::<T>())
    }

    /// Start describing a type that has no Rust counterpart
    pub fn named(name: impl Into<String>) -> TypeInfoBuilder {
        let name = name.into();
        TypeInfoBuilder::new(name.clone(), name)
    }

    /// Public instance properties in declaration order
    pub fn public_instance_properties(&self) -> impl Iterator<Item = &PropertyInfo> {
        self.properties
            .iter()
            .filter(|prop| prop.is_public && !prop.is_static)
    }

    /// Public instance methods declared directly on this type
    pub fn declared_public_methods(&self) -> impl Iterator<Item = &MethodInfo> {
        self.methods
            .iter()
            .filter(|method| method.is_public && !method.is_static && !method.inherited)
    }

    /// First type-level attribute of `kind`
    pub fn attribute(&self, kind: &str) -> Option<&Attribute> {
        attribute::find(&self.attributes, kind)
    }

    /// Construct a sample instance; `None` when there is no constructor
    pub fn instantiate(&self) -> Option<Result<Instance, ReflectError>> {
        self.constructor.as_ref().map(Constructor::construct)
    }
}

/// Short name of `T` with every module path removed
pub fn short_type_name<T: ?Sized>() -> String {
    shorten_type_path(std::any::type_name::<T>())
}

/// Remove module paths from every segment of a type path,
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`
pub fn shorten_type_path(path: &str) -> String {
    let mut result = String::with_capacity(path.len());
    let mut segment = String::new();

    for ch in path.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            segment.push(ch);
        } else {
            result.push_str(last_path_segment(&segment));
            segment.clear();
            result.push(ch);
        }
    }
    result.push_str(last_path_segment(&segment));

    result
}

fn last_path_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
