//! Unit catalog lookups

use ladle_core::{LadleError, Value};
use ladle_plugin::{ArgMeta, EvalContext, FunctionMeta, FunctionPlugin};
use ladle_units::UNITS;

use crate::helpers::{
    extract_kind, extract_optional_bool, extract_optional_system, extract_unit, unit_to_value,
};

// ============ describe_unit ============

pub struct DescribeUnit;

static DESCRIBE_UNIT_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("unit", "Text", "Unit id"),
    ArgMeta::optional("abbreviated", "Bool", "Short label (\"tsp\") instead of long", "preference"),
];

static DESCRIBE_UNIT_EXAMPLES: [&str; 2] = [
    "describe_unit(\"teaspoon\") -> {id: teaspoon, kind: volume, label: tsp}",
    "describe_unit(\"USCup\", false) -> {label: US cup}",
];

static DESCRIBE_UNIT_RELATED: [&str; 2] = ["list_units", "family_members"];

impl FunctionPlugin for DescribeUnit {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "describe_unit",
            description: "Kind, system and display label of a unit",
            usage: "describe_unit(unit, [abbreviated])",
            args: &DESCRIBE_UNIT_ARGS,
            returns: "Object",
            examples: &DESCRIBE_UNIT_EXAMPLES,
            category: "kitchen",
            related: &DESCRIBE_UNIT_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        if args.is_empty() {
            return Value::Error(LadleError::arg_count("describe_unit", 1, 0));
        }

        let unit = match extract_unit(&args[0], "describe_unit", "unit") {
            Ok(u) => u,
            Err(e) => return Value::Error(e),
        };
        let abbreviated = match extract_optional_bool(args, 1, "describe_unit", "abbreviated") {
            Ok(flag) => flag.unwrap_or(ctx.abbreviate()),
            Err(e) => return Value::Error(e),
        };

        unit_to_value(unit, ctx.system(), abbreviated)
    }
}

// ============ family_members ============

pub struct FamilyMembers;

static FAMILY_MEMBERS_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("unit", "Text", "Unit id whose kind selects the family"),
    ArgMeta::optional("system", "Text", "System of the family", "preference"),
    ArgMeta::optional("include_self", "Bool", "Keep the unit itself in the result", "true"),
];

static FAMILY_MEMBERS_EXAMPLES: [&str; 2] = [
    "family_members(\"gram\") -> [gram, hecto, kilo]",
    "family_members(\"liter\", \"us\") -> [teaspoon, dessertspoon, tablespoon, USFluidOunce, USCup, USQuart, USGallon]",
];

static FAMILY_MEMBERS_RELATED: [&str; 2] = ["quantity_alternatives", "list_units"];

impl FunctionPlugin for FamilyMembers {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "family_members",
            description: "Units a cook would use for this unit's kind in a system, smallest first",
            usage: "family_members(unit, [system], [include_self])",
            args: &FAMILY_MEMBERS_ARGS,
            returns: "List",
            examples: &FAMILY_MEMBERS_EXAMPLES,
            category: "kitchen",
            related: &FAMILY_MEMBERS_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        if args.is_empty() {
            return Value::Error(LadleError::arg_count("family_members", 1, 0));
        }

        let unit = match extract_unit(&args[0], "family_members", "unit") {
            Ok(u) => u,
            Err(e) => return Value::Error(e),
        };
        let system = match extract_optional_system(args, 1, ctx, "family_members", "system") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };
        let include_self = match extract_optional_bool(args, 2, "family_members", "include_self") {
            Ok(flag) => flag.unwrap_or(true),
            Err(e) => return Value::Error(e),
        };

        Value::List(
            unit.family_members(system, include_self)
                .into_iter()
                .map(|u| unit_to_value(u, system, ctx.abbreviate()))
                .collect(),
        )
    }
}

// ============ list_units ============

pub struct ListUnits;

static LIST_UNITS_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("kind", "Text", "volume, weight or misc"),
    ArgMeta::optional("system", "Text", "Only units of this system", "all systems"),
];

static LIST_UNITS_EXAMPLES: [&str; 2] = [
    "list_units(\"weight\") -> [gram, USOunce, imperialOunce, hecto, ...]",
    "list_units(\"volume\", \"imperial\") -> [imperialFluidOunce, imperialCup, ...]",
];

static LIST_UNITS_RELATED: [&str; 2] = ["describe_unit", "family_members"];

impl FunctionPlugin for ListUnits {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "list_units",
            description: "Catalog units of a kind, smallest first, optionally limited to one system",
            usage: "list_units(kind, [system])",
            args: &LIST_UNITS_ARGS,
            returns: "List",
            examples: &LIST_UNITS_EXAMPLES,
            category: "kitchen",
            related: &LIST_UNITS_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        if args.is_empty() {
            return Value::Error(LadleError::arg_count("list_units", 1, 0));
        }

        let kind = match extract_kind(&args[0], "list_units", "kind") {
            Ok(k) => k,
            Err(e) => return Value::Error(e),
        };
        let units = match args.get(1) {
            None | Some(Value::Null) => UNITS.by_kind(kind),
            Some(_) => match extract_optional_system(args, 1, ctx, "list_units", "system") {
                Ok(system) => UNITS.sorted_filtered(kind, system, ctx.system()),
                Err(e) => return Value::Error(e),
            },
        };

        Value::List(
            units
                .into_iter()
                .map(|u| unit_to_value(u, ctx.system(), ctx.abbreviate()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ladle_core::codes;
    use ladle_units::MeasurementSystem;

    fn ids(value: &Value) -> Vec<String> {
        value
            .as_list()
            .unwrap()
            .iter()
            .map(|u| u.get("id").as_text().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_describe_unit() {
        let ctx = EvalContext::new();
        let result = DescribeUnit.call(&[Value::from("teaspoon")], &ctx);
        assert_eq!(result.get("kind").as_text(), Some("volume"));
        assert_eq!(result.get("system").as_text(), Some("metric"));
        assert_eq!(result.get("label").as_text(), Some("tsp"));

        let result = DescribeUnit.call(&[Value::from("USCup"), Value::Bool(false)], &ctx);
        assert_eq!(result.get("label").as_text(), Some("US cup"));
        assert_eq!(result.get("system").as_text(), Some("us"));
    }

    #[test]
    fn test_describe_unit_spoon_follows_preference() {
        let ctx = EvalContext::new().with_system(MeasurementSystem::Imperial);
        let result = DescribeUnit.call(&[Value::from("tablespoon")], &ctx);
        assert_eq!(result.get("system").as_text(), Some("imperial"));
    }

    #[test]
    fn test_family_members() {
        let ctx = EvalContext::new();
        let result = FamilyMembers.call(&[Value::from("gram")], &ctx);
        assert_eq!(ids(&result), vec!["gram", "hecto", "kilo"]);

        let result = FamilyMembers.call(
            &[Value::from("gram"), Value::from("metric"), Value::Bool(false)],
            &ctx,
        );
        assert_eq!(ids(&result), vec!["hecto", "kilo"]);

        let result = FamilyMembers.call(&[Value::from("pinch"), Value::from("us")], &ctx);
        assert_eq!(ids(&result), vec!["pinch"]);
    }

    #[test]
    fn test_flag_arguments_must_be_bool() {
        let ctx = EvalContext::new();
        let result = FamilyMembers.call(
            &[Value::from("gram"), Value::Null, Value::from("false")],
            &ctx,
        );
        assert!(matches!(result, Value::Error(ref e) if e.code == codes::ARG_TYPE));

        let result = DescribeUnit.call(&[Value::from("gram"), Value::Number(0.0)], &ctx);
        assert!(matches!(result, Value::Error(ref e) if e.code == codes::ARG_TYPE));
    }

    #[test]
    fn test_list_units() {
        let ctx = EvalContext::new();
        let result = ListUnits.call(&[Value::from("misc")], &ctx);
        assert_eq!(ids(&result), vec!["piece", "pinch", "part", "dash"]);

        let result = ListUnits.call(&[Value::from("weight"), Value::from("us")], &ctx);
        assert_eq!(ids(&result), vec!["USOunce", "USPound"]);

        let result = ListUnits.call(&[Value::from("length")], &ctx);
        assert!(matches!(result, Value::Error(ref e) if e.code == codes::UNKNOWN_KIND));
    }
}
