#![deny(rust_2018_idioms)]

//! Field state for interactive forms: current values, touched and dirty
//! tracking, and bindings that adapt one value store to text, radio,
//! checkbox and raw controls.

mod binding;
mod io;
mod store;

pub use binding::{
    BindingKind, ChangeEvent, CheckboxBinding, CheckboxMode, EventBinding, EventCallback,
    GROUP_SUFFIX, InputType, RadioBinding, RawBinding, TextBinding, ValueBinding, ValueCallback,
    value_to_string,
};
pub use io::{DocumentFormat, parse_document_str};
pub use store::{
    ClearPolicy, FieldStore, InitialStateError, Listener, ListenerId, StoreEvent, StoreOptions,
    WriteFlags, is_blank, is_truthy, strict_eq, structural_eq,
};

pub mod prelude {
    pub use super::{
        ChangeEvent, ClearPolicy, EventBinding, FieldStore, StoreEvent, StoreOptions,
        ValueBinding, WriteFlags,
    };
}
