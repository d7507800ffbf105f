pub type ScopeId = i32;

pub type ParamMap = std::collections::HashMap<String, String>;

pub type TemplateResult<T> = Result<T, crate::errors::TemplateError>;
