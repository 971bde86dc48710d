//! Built-in formula functions

pub mod aggregate;
pub mod logical;
pub mod lookup;
pub mod math;

use crate::error::FormulaResult;
use ahash::AHashMap;
use lazy_regex::regex_is_match;
use sheetcalc_core::number::parse_float;
use sheetcalc_core::Snapshot;

/// Function implementation signature
///
/// Receives the raw (uppercased) argument texts, split the way the dialect
/// splits them, and the snapshot of displayed values.
pub type FunctionImpl = fn(&[&str], &Snapshot) -> FormulaResult<FunctionOutcome>;

/// What a function call produced
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionOutcome {
    /// A display value
    Value(String),
    /// Lookup found nothing (`#N/A`)
    NotAvailable,
    /// Arguments did not fit; evaluation continues as if no function matched
    Declined,
}

impl FunctionOutcome {
    /// Wrap a number formatted for display
    pub fn number(n: f64) -> Self {
        FunctionOutcome::Value(crate::format::format_number(n))
    }
}

/// Function definition
pub struct FunctionDef {
    /// Function name (uppercase)
    pub name: &'static str,
    /// Number of arguments
    ///
    /// The first `arg_count - 1` arguments each end at the next comma, the
    /// last one at the next `)`. Text after that `)` is ignored.
    pub arg_count: usize,
    /// Implementation
    pub implementation: FunctionImpl,
}

/// Function registry
pub struct FunctionRegistry {
    functions: AHashMap<&'static str, FunctionDef>,
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionRegistry {
    /// Create a new registry with all built-in functions
    pub fn new() -> Self {
        let mut registry = Self {
            functions: AHashMap::new(),
        };

        registry.register_aggregate_functions();
        registry.register_math_functions();
        registry.register_logical_functions();
        registry.register_lookup_functions();

        registry
    }

    /// Look up a function by name
    pub fn get(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name)
    }

    /// Register a function
    pub fn register(&mut self, def: FunctionDef) {
        self.functions.insert(def.name, def);
    }

    /// Names of all registered functions, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Try to evaluate `content` (formula text without `=`) as a function call
    ///
    /// Returns `Declined` when the content does not name a registered
    /// function or its arguments cannot be split.
    pub fn call(&self, content: &str, snapshot: &Snapshot) -> FormulaResult<FunctionOutcome> {
        let Some((name, rest)) = content.split_once('(') else {
            return Ok(FunctionOutcome::Declined);
        };
        let Some(def) = self.get(name) else {
            return Ok(FunctionOutcome::Declined);
        };
        let Some(args) = split_args(rest, def.arg_count) else {
            log::trace!("{} arguments could not be split", def.name);
            return Ok(FunctionOutcome::Declined);
        };

        log::trace!("calling {} with {:?}", def.name, args);
        (def.implementation)(&args, snapshot)
    }

    fn register_aggregate_functions(&mut self) {
        let aggregates: [(&'static str, FunctionImpl); 7] = [
            ("SUM", aggregate::fn_sum as FunctionImpl),
            ("AVERAGE", aggregate::fn_average as FunctionImpl),
            ("AVG", aggregate::fn_average as FunctionImpl),
            ("COUNT", aggregate::fn_count as FunctionImpl),
            ("MIN", aggregate::fn_min as FunctionImpl),
            ("MAX", aggregate::fn_max as FunctionImpl),
            ("PRODUCT", aggregate::fn_product as FunctionImpl),
        ];

        for (name, implementation) in aggregates {
            self.register(FunctionDef {
                name,
                arg_count: 1,
                implementation,
            });
        }
    }

    fn register_math_functions(&mut self) {
        // ROUND
        self.register(FunctionDef {
            name: "ROUND",
            arg_count: 2,
            implementation: math::fn_round,
        });

        // ABS
        self.register(FunctionDef {
            name: "ABS",
            arg_count: 1,
            implementation: math::fn_abs,
        });

        // SQRT
        self.register(FunctionDef {
            name: "SQRT",
            arg_count: 1,
            implementation: math::fn_sqrt,
        });

        // POWER
        self.register(FunctionDef {
            name: "POWER",
            arg_count: 2,
            implementation: math::fn_power,
        });

        // MOD
        self.register(FunctionDef {
            name: "MOD",
            arg_count: 2,
            implementation: math::fn_mod,
        });

        // CEILING
        self.register(FunctionDef {
            name: "CEILING",
            arg_count: 1,
            implementation: math::fn_ceiling,
        });

        // FLOOR
        self.register(FunctionDef {
            name: "FLOOR",
            arg_count: 1,
            implementation: math::fn_floor,
        });
    }

    fn register_logical_functions(&mut self) {
        self.register(FunctionDef {
            name: "IF",
            arg_count: 3,
            implementation: logical::fn_if,
        });
    }

    fn register_lookup_functions(&mut self) {
        self.register(FunctionDef {
            name: "VLOOKUP",
            arg_count: 3,
            implementation: lookup::fn_vlookup,
        });
    }
}

/// Split the text after `NAME(` into `count` arguments
///
/// Each argument but the last ends at the first following comma; the last
/// ends at the first following `)`.
pub fn split_args(text: &str, count: usize) -> Option<Vec<&str>> {
    let mut args = Vec::with_capacity(count);
    let mut rest = text;

    for _ in 1..count {
        let (arg, tail) = rest.split_once(',')?;
        args.push(arg);
        rest = tail;
    }

    let (last, _) = rest.split_once(')')?;
    args.push(last);
    Some(args)
}

/// Whether text is a single bare cell reference such as `B12`
pub fn is_cell_reference(text: &str) -> bool {
    regex_is_match!(r"^[A-Z][0-9]+$", text)
}

/// Remove one pair of surrounding double quotes
pub fn strip_quotes(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
}

/// Resolve a scalar argument to text
///
/// A quoted string is taken literally, a bare cell reference reads the
/// snapshot (absent cells read as ""), anything else is the trimmed text.
pub fn resolve_scalar<'a>(arg: &'a str, snapshot: &'a Snapshot) -> &'a str {
    let arg = arg.trim();
    if arg.len() >= 2 && arg.starts_with('"') && arg.ends_with('"') {
        &arg[1..arg.len() - 1]
    } else if is_cell_reference(arg) {
        snapshot.get(arg).unwrap_or("")
    } else {
        arg
    }
}

/// Resolve a scalar argument to a number, if it reads as one
pub fn scalar_number(arg: &str, snapshot: &Snapshot) -> Option<f64> {
    parse_float(resolve_scalar(arg, snapshot))
}
