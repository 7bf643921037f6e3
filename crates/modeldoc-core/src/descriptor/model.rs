//! Model descriptor building
//!
//! Copyright (c) 2025 Modeldoc Team
//! Licensed under the Apache-2.0 license

use super::{ModelDescriptor, PropertyResolver};
use crate::reflect::TypeInfo;
use crate::xmldoc::XmlDocumentation;
use tracing::trace;

impl ModelDescriptor {
    /// Resolve every public instance property of `type_info`, in declaration order
    pub fn build(type_info: &TypeInfo, docs: &XmlDocumentation) -> Self {
        let resolver = PropertyResolver::new(type_info, docs);

        let properties = type_info
            .public_instance_properties()
            .map(|property| resolver.resolve(property))
            .collect::<Vec<_>>();

        trace!(
            model = %type_info.name,
            properties = properties.len(),
            "Built model descriptor"
        );

        Self {
            model_name: type_info.name.clone(),
            properties,
        }
    }

    /// One descriptor per type, in the given order
    pub fn build_all(types: &[TypeInfo], docs: &XmlDocumentation) -> Vec<Self> {
        types.iter().map(|info| Self::build(info, docs)).collect()
    }
}
