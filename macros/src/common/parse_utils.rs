//! Common parsing utilities

use syn::{
    Token, Type,
    parse::{Parse, ParseStream},
};

use super::BoolExpr;

// =============================================================================
// Type Constraint Parsing: `Type: Expr`
// =============================================================================

/// A single shape check: `Vec<i32>: SequenceLike<i64> & !Numeric`
#[derive(Clone)]
pub struct TypeCheck {
    pub ty: Type,
    pub expr: BoolExpr,
}

impl Parse for TypeCheck {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty: Type = input.parse()?;
        input.parse::<Token![:]>()?;
        let expr: BoolExpr = input.parse()?;
        Ok(TypeCheck { ty, expr })
    }
}

/// One or more checks separated by commas; a trailing comma is allowed.
pub struct CheckList {
    pub checks: Vec<TypeCheck>,
}

impl Parse for CheckList {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut checks = Vec::new();

        // Parse first check (required)
        checks.push(input.parse()?);

        while input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
            checks.push(input.parse()?);
        }

        Ok(CheckList { checks })
    }
}
