//! The Java source unit model: class, fields, methods, annotations.
//!
//! Construction never fails at this layer; malformed identifiers are the
//! caller's responsibility. Instances are transient value objects handed off
//! immutably to whoever persists them.

use crate::body::Stmt;
use indexmap::IndexSet;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Public,
    Private,
    PackagePrivate,
}

impl Visibility {
    pub(crate) fn keyword(self) -> Option<&'static str> {
        match self {
            Visibility::Public => Some("public"),
            Visibility::Private => Some("private"),
            Visibility::PackagePrivate => None,
        }
    }
}

/// A source annotation. The literal value, when present, is emitted verbatim
/// (`@RunWith(Arquillian.class)`), never quoted as a string constant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotation {
    pub name: String,
    pub literal_value: Option<String>,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Annotation {
            name: name.into(),
            literal_value: None,
        }
    }

    pub fn with_literal(name: impl Into<String>, literal: impl Into<String>) -> Self {
        Annotation {
            name: name.into(),
            literal_value: Some(literal.into()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub visibility: Visibility,
    pub type_name: String,
    pub name: String,
    pub annotations: Vec<Annotation>,
}

impl Field {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Field {
            visibility: Visibility::default(),
            type_name: type_name.into(),
            name: name.into(),
            annotations: Vec::new(),
        }
    }

    pub fn private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Method {
    pub name: String,
    pub visibility: Visibility,
    pub is_static: bool,
    /// `None` renders as `void`.
    pub return_type: Option<String>,
    /// Raw parameter declarations, e.g. `String[] args`.
    pub parameters: Vec<String>,
    pub annotations: Vec<Annotation>,
    pub body: Vec<Stmt>,
}

impl Method {
    /// A public instance method returning void with an empty body.
    pub fn new(name: impl Into<String>) -> Self {
        Method {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
            return_type: None,
            parameters: Vec::new(),
            annotations: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn static_method(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn returns(mut self, type_name: impl Into<String>) -> Self {
        self.return_type = Some(type_name.into());
        self
    }

    pub fn parameter(mut self, declaration: impl Into<String>) -> Self {
        self.parameters.push(declaration.into());
        self
    }

    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn statement(mut self, stmt: Stmt) -> Self {
        self.body.push(stmt);
        self
    }

    pub fn body(mut self, body: Vec<Stmt>) -> Self {
        self.body = body;
        self
    }
}

/// A complete Java class source unit.
#[derive(Clone, Debug, PartialEq)]
pub struct JavaClass {
    pub package: String,
    pub name: String,
    pub visibility: Visibility,
    pub super_type: Option<String>,
    pub imports: IndexSet<String>,
    pub annotations: Vec<Annotation>,
    pub fields: Vec<Field>,
    pub methods: Vec<Method>,
}

impl JavaClass {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        JavaClass {
            package: package.into(),
            name: name.into(),
            visibility: Visibility::Public,
            super_type: None,
            imports: IndexSet::new(),
            annotations: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Sets the superclass. At most one; a second call replaces the first.
    pub fn extends(mut self, super_type: impl Into<String>) -> Self {
        self.super_type = Some(super_type.into());
        self
    }

    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Adds an import. Duplicates are ignored; insertion order is preserved.
    pub fn import(mut self, qualified_name: impl Into<String>) -> Self {
        self.imports.insert(qualified_name.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }

    /// The path of the source file relative to a source root.
    pub fn relative_path(&self) -> String {
        if self.package.is_empty() {
            format!("{}.java", self.name)
        } else {
            format!("{}/{}.java", self.package.replace('.', "/"), self.name)
        }
    }
}
