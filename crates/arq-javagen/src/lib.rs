#![doc = include_str!("../README.md")]

mod body;
mod class;
mod render;

pub use body::{BinOp, Expr, MethodCall, Stmt};
pub use class::{Annotation, Field, JavaClass, Method, Visibility};
