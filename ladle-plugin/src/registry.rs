//! Plugin Registry

use crate::{EvalContext, FunctionMeta, FunctionPlugin};
use ladle_core::{LadleError, Value};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Central registry of host functions, keyed by lower-cased name
pub struct PluginRegistry {
    functions: HashMap<String, Arc<dyn FunctionPlugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    pub fn with_function<F: FunctionPlugin + 'static>(mut self, f: F) -> Self {
        let name = f.meta().name.to_lowercase();
        self.functions.insert(name, Arc::new(f));
        self
    }

    pub fn get_function(&self, name: &str) -> Option<&dyn FunctionPlugin> {
        self.functions.get(&name.to_lowercase()).map(|f| f.as_ref())
    }

    /// Sorted names of all registered functions
    pub fn function_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.functions.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn call_function(&self, name: &str, args: &[Value], ctx: &EvalContext) -> Value {
        match self.get_function(name) {
            Some(f) => {
                tracing::trace!(function = name, args = args.len(), "calling function");
                f.call(args, ctx)
            }
            None => {
                // Find similar function names for better error message
                let similar = self.find_similar_functions(name);
                let mut err = LadleError::undefined_func(name);
                if !similar.is_empty() {
                    let suggestions: Vec<&str> = similar.iter().take(5).map(|s| s.as_str()).collect();
                    err = err.with_suggestion(format!(
                        "Similar: {}. Use help() for full list.",
                        suggestions.join(", ")
                    ));
                }
                Value::Error(err)
            }
        }
    }

    /// Find function names similar to the given name (for error suggestions)
    fn find_similar_functions(&self, name: &str) -> Vec<String> {
        let name_lower = name.to_lowercase();
        let mut matches: Vec<(String, usize)> = self.functions.keys()
            .filter_map(|func_name| {
                let score = Self::similarity_score(&name_lower, func_name);
                if score > 0 {
                    Some((func_name.clone(), score))
                } else {
                    None
                }
            })
            .collect();

        // Higher score first, then alphabetical for a deterministic order
        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        matches.into_iter().map(|(name, _)| name).collect()
    }

    /// Similarity score between a query and a candidate name
    fn similarity_score(query: &str, candidate: &str) -> usize {
        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        // Shared words ("unit" in "convert_unit" and "describe_unit")
        let query_words: HashSet<&str> = query.split('_').filter(|w| w.len() > 2).collect();
        let shared = candidate.split('_').filter(|w| query_words.contains(w)).count();
        score += shared * 20;

        // Penalize length difference
        let len_diff = query.len().abs_diff(candidate.len());
        if len_diff < 5 && score > 0 {
            score += 5 - len_diff;
        }

        score
    }

    pub fn help(&self, name: Option<&str>) -> Value {
        match name {
            Some(n) => self.help_for(n),
            None => self.general_help(),
        }
    }

    fn help_for(&self, name: &str) -> Value {
        match self.functions.get(&name.to_lowercase()) {
            Some(f) => Value::Object(self.function_to_help(f.meta())),
            None => Value::Error(LadleError::not_found(name)),
        }
    }

    fn general_help(&self) -> Value {
        let mut help = HashMap::new();

        let mut funcs_by_cat: HashMap<String, Vec<String>> = HashMap::new();
        for (name, f) in &self.functions {
            let cat = f.meta().category.to_string();
            funcs_by_cat.entry(cat).or_default().push(name.clone());
        }
        help.insert("functions".to_string(),
            Value::Object(funcs_by_cat.into_iter()
                .map(|(k, mut v)| {
                    v.sort();
                    (k, Value::List(v.into_iter().map(Value::Text).collect()))
                })
                .collect()));

        help.insert("usage".to_string(),
            Value::Text("Call help('function_name') for detailed help.".to_string()));

        Value::Object(help)
    }

    fn function_to_help(&self, meta: FunctionMeta) -> HashMap<String, Value> {
        let mut help = HashMap::new();
        help.insert("name".to_string(), Value::Text(meta.name.to_string()));
        help.insert("description".to_string(), Value::Text(meta.description.to_string()));
        help.insert("usage".to_string(), Value::Text(meta.usage.to_string()));
        help.insert("returns".to_string(), Value::Text(meta.returns.to_string()));
        help.insert("category".to_string(), Value::Text(meta.category.to_string()));
        help.insert("args".to_string(), Value::List(
            meta.args.iter().map(|a| {
                let mut arg = HashMap::new();
                arg.insert("name".to_string(), Value::Text(a.name.to_string()));
                arg.insert("type".to_string(), Value::Text(a.typ.to_string()));
                arg.insert("description".to_string(), Value::Text(a.description.to_string()));
                arg.insert("optional".to_string(), Value::Bool(a.optional));
                if let Some(default) = a.default {
                    arg.insert("default".to_string(), Value::Text(default.to_string()));
                }
                Value::Object(arg)
            }).collect()
        ));
        help.insert("examples".to_string(), Value::List(
            meta.examples.iter().map(|e| Value::Text(e.to_string())).collect()
        ));
        help.insert("related".to_string(), Value::List(
            meta.related.iter().map(|r| Value::Text(r.to_string())).collect()
        ));
        help
    }

    pub fn list_functions(&self, category: Option<&str>) -> Value {
        let mut funcs: Vec<(&'static str, Value)> = self.functions.values()
            .filter(|f| category.map_or(true, |c| f.meta().category == c))
            .map(|f| {
                let meta = f.meta();
                let mut obj = HashMap::new();
                obj.insert("name".to_string(), Value::Text(meta.name.to_string()));
                obj.insert("description".to_string(), Value::Text(meta.description.to_string()));
                obj.insert("usage".to_string(), Value::Text(meta.usage.to_string()));
                obj.insert("category".to_string(), Value::Text(meta.category.to_string()));
                (meta.name, Value::Object(obj))
            })
            .collect();
        funcs.sort_by(|a, b| a.0.cmp(b.0));
        Value::List(funcs.into_iter().map(|(_, v)| v).collect())
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArgMeta;
    use ladle_core::codes;

    struct Twice;

    static TWICE_ARGS: [ArgMeta; 1] = [ArgMeta::required("amount", "Number", "Amount to double")];

    impl FunctionPlugin for Twice {
        fn meta(&self) -> FunctionMeta {
            FunctionMeta {
                name: "double_amount",
                description: "Double an amount",
                usage: "double_amount(amount)",
                args: &TWICE_ARGS,
                returns: "Number",
                examples: &["double_amount(2) -> 4"],
                category: "test",
                related: &[],
            }
        }

        fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
            match args.first().and_then(|v| v.as_number()) {
                Some(n) => Value::Number(n * 2.0),
                None => Value::Error(LadleError::arg_count("double_amount", 1, args.len())),
            }
        }
    }

    fn registry() -> PluginRegistry {
        PluginRegistry::new().with_function(Twice)
    }

    #[test]
    fn test_call_function_case_insensitive() {
        let reg = registry();
        let ctx = EvalContext::new();
        assert_eq!(reg.call_function("DOUBLE_AMOUNT", &[Value::Number(2.0)], &ctx), Value::Number(4.0));
        assert_eq!(reg.function_names(), vec!["double_amount".to_string()]);
    }

    #[test]
    fn test_unknown_function_suggests_similar() {
        let reg = registry();
        let result = reg.call_function("double", &[], &EvalContext::new());
        match result {
            Value::Error(e) => {
                assert_eq!(e.code, codes::UNDEFINED_FUNC);
                assert!(e.suggestion.unwrap().contains("double_amount"));
            }
            other => panic!("Expected Error, got {:?}", other),
        }
    }

    #[test]
    fn test_help() {
        let reg = registry();
        let help = reg.help(Some("double_amount"));
        assert_eq!(help.get("usage").as_text(), Some("double_amount(amount)"));
        assert_eq!(help.get("args").as_list().map(|a| a.len()), Some(1));

        assert!(reg.help(Some("nope")).is_error());

        let general = reg.help(None);
        let test_funcs = general.get("functions").get("test");
        assert_eq!(test_funcs.as_list().map(|l| l.len()), Some(1));
    }

    #[test]
    fn test_list_functions_by_category() {
        let reg = registry();
        assert_eq!(reg.list_functions(Some("test")).as_list().map(|l| l.len()), Some(1));
        assert_eq!(reg.list_functions(Some("kitchen")).as_list().map(|l| l.len()), Some(0));
    }

    #[test]
    fn test_required_args() {
        assert_eq!(Twice.meta().required_args(), 1);
    }
}
