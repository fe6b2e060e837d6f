//! Declarative macros shared by the OpenAPI object types.
//!
//! This module provides macros to generate builder types that work alongside the direct
//! builder methods on the document structs, plus the boilerplate trait implementations every
//! document object carries (extension access and `serde::Serialize` through [`Marshal`]).
//!
//! [`Marshal`]: crate::marshal::Marshal

/// Constructs a build function for a builder type.
///
/// Generates a `build()` method that consumes the builder and returns
/// the final struct with all fields transferred.
macro_rules! build_fn {
    ( $vis:vis $name:ident $( $field:ident ),+ ) => {
        #[doc = concat!("Constructs a new [`", stringify!($name),"`] taking all fields values from this object.")]
        $vis fn build(self) -> $name {
            $name {
                $(
                    $field: self.$field,
                )*
            }
        }
    };
}

pub(crate) use build_fn;

/// Sets a field value in a builder using method chaining.
///
/// Returns `self` to enable fluent API.
macro_rules! set_value {
    ( $self:ident $field:ident $value:expr ) => {{
        $self.$field = $value;
        $self
    }};
}

pub(crate) use set_value;

/// Generates `From` implementations between builder and target type.
///
/// Creates bidirectional conversions:
/// - `From<Builder> for Type` - calls `build()`
/// - `From<Type> for Builder` - transfers fields
macro_rules! from {
    ( $builder_name:ident $type_name:ident $( $field:ident ),+ ) => {
        impl From<$builder_name> for $type_name {
            fn from(value: $builder_name) -> Self {
                value.build()
            }
        }

        impl From<$type_name> for $builder_name {
            fn from(value: $type_name) -> Self {
                Self {
                    $( $field: value.$field, )*
                }
            }
        }
    };
}

pub(crate) use from;

/// Main builder macro that generates both struct and builder types.
///
/// This macro creates:
/// 1. The main struct with all its attributes and fields
/// 2. A corresponding builder struct with the same fields
/// 3. A `builder()` method on the main struct
/// 4. A `build()` method on the builder struct
///
/// The builder's `new()` constructor and setters are written by hand next to the invocation.
///
/// # Example
///
/// ```ignore
/// builder! {
///     InfoBuilder;
///
///     #[derive(Debug, Clone)]
///     pub struct Info {
///         pub title: String,
///         pub version: String,
///     }
/// }
/// ```
macro_rules! builder {
    ( $( #[$builder_meta:meta] )* $builder_name:ident; $(#[$meta:meta])* $vis:vis $key:ident $name:ident $( $tt:tt )* ) => {
        $crate::builder_macros::builder!( @type_impl $builder_name $( #[$meta] )* $vis $key $name $( $tt )* );
        $crate::builder_macros::builder!( @builder_impl $( #[$builder_meta] )* $builder_name $( #[$meta] )* $vis $key $name $( $tt )* );
    };

    ( @type_impl $builder_name:ident $( #[$meta:meta] )* $vis:vis $key:ident $name:ident
        { $( $( #[$field_meta:meta] )* $field_vis:vis $field:ident: $field_ty:ty, )* }
    ) => {
        $( #[$meta] )*
        $vis $key $name {
            $( $( #[$field_meta] )* $field_vis $field: $field_ty, )*
        }

        impl $name {
            #[doc = concat!("Construct a new ", stringify!($builder_name), ".")]
            #[doc = ""]
            #[doc = concat!("This is effectively same as calling [`", stringify!($builder_name), "::new`]")]
            $vis fn builder() -> $builder_name {
                $builder_name::new()
            }
        }
    };

    ( @builder_impl $( #[$builder_meta:meta] )* $builder_name:ident $( #[$meta:meta] )* $vis:vis $key:ident $name:ident
        { $( $( #[$field_meta:meta] )* $field_vis:vis $field:ident: $field_ty:ty, )* }
    ) => {
        $( #[$builder_meta] )*
        $vis $key $builder_name {
            $( $field_vis $field: $field_ty, )*
        }

        impl $builder_name {
            $crate::builder_macros::build_fn!($vis $name $( $field ),*);
        }

        $crate::builder_macros::from!($builder_name $name $( $field ),*);
    };
}

pub(crate) use builder;

/// Implements [`Extensible`](crate::openapi::Extensible) for types holding an
/// `extensions: Option<Extensions>` field.
macro_rules! extensible {
    ( $( $ty:ty ),+ $(,)? ) => {
        $(
            impl $crate::openapi::Extensible for $ty {
                fn extensions(&self) -> Option<&$crate::openapi::Extensions> {
                    self.extensions.as_ref()
                }

                fn extensions_mut(&mut self) -> &mut Option<$crate::openapi::Extensions> {
                    &mut self.extensions
                }
            }
        )+
    };
}

pub(crate) use extensible;

/// Implements `serde::Serialize` by encoding the [`Marshal`](crate::marshal::Marshal) form.
macro_rules! serialize_via_marshal {
    ( $( $ty:ty ),+ $(,)? ) => {
        $(
            impl serde::Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serde::Serialize::serialize(
                        &$crate::marshal::Marshal::marshal(self),
                        serializer,
                    )
                }
            }
        )+
    };
}

pub(crate) use serialize_via_marshal;
