//! Fluent assertion API for AST nodes

use super::matchers::TextMatch;
use crate::clue::ast::{
    AstNode, Block, CatchBlock, Expr, IfStmt, LocalDecl, MatchCase, MatchExpr, MatchStmt, Number,
    Program, TryStmt,
};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a program
pub fn assert_ast(program: &Program) -> ProgramAssertion<'_> {
    ProgramAssertion { program }
}

fn summarize_exprs(exprs: &[Expr]) -> String {
    exprs.iter().map(summarize).collect::<Vec<_>>().join(", ")
}

fn summarize(expr: &Expr) -> String {
    let label = expr.display_label();
    if label.is_empty() {
        expr.node_type().to_string()
    } else {
        format!("{}({})", expr.node_type(), label)
    }
}

fn assert_index(context: &str, what: &str, index: usize, len: usize) {
    assert!(
        index < len,
        "{}: {} index {} out of bounds (found {})",
        context,
        what,
        index,
        len
    );
}

// ============================================================================
// Program Assertions
// ============================================================================

pub struct ProgramAssertion<'a> {
    program: &'a Program,
}

impl<'a> ProgramAssertion<'a> {
    /// Assert the number of top-level expressions
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.program.body.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} items, found {} items: [{}]",
            expected,
            actual,
            summarize_exprs(&self.program.body)
        );
        self
    }

    pub fn is_empty(self) -> Self {
        self.item_count(0)
    }

    /// Assert on a specific top-level expression by index
    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ExprAssertion<'a>),
    {
        assert_index("program", "Item", index, self.program.body.len());
        assertion(ExprAssertion::new(
            &self.program.body[index],
            format!("items[{}]", index),
        ));
        self
    }
}

// ============================================================================
// Expression Assertions
// ============================================================================

pub struct ExprAssertion<'a> {
    expr: &'a Expr,
    context: String,
}

impl<'a> ExprAssertion<'a> {
    fn new(expr: &'a Expr, context: String) -> Self {
        Self { expr, context }
    }

    fn mismatch(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            summarize(self.expr)
        )
    }

    /// Assert this expression is a Block and return block-specific assertions
    pub fn assert_block(self) -> BlockAssertion<'a> {
        match self.expr {
            Expr::Block(block) => BlockAssertion {
                block,
                context: self.context,
            },
            _ => self.mismatch("block"),
        }
    }

    pub fn assert_number(self) -> NumberAssertion<'a> {
        match self.expr {
            Expr::Number(number) => NumberAssertion {
                number,
                context: self.context,
            },
            _ => self.mismatch("number"),
        }
    }

    pub fn assert_local(self) -> LocalAssertion<'a> {
        match self.expr {
            Expr::LocalDecl(decl) => LocalAssertion {
                decl,
                context: self.context,
            },
            _ => self.mismatch("local_decl"),
        }
    }

    pub fn assert_if(self) -> IfAssertion<'a> {
        match self.expr {
            Expr::If(stmt) => IfAssertion {
                stmt,
                context: self.context,
            },
            _ => self.mismatch("if_stmt"),
        }
    }

    pub fn assert_match(self) -> MatchAssertion<'a> {
        match self.expr {
            Expr::Match(stmt) => MatchAssertion {
                stmt,
                context: self.context,
            },
            _ => self.mismatch("match_stmt"),
        }
    }

    pub fn assert_try(self) -> TryAssertion<'a> {
        match self.expr {
            Expr::Try(stmt) => TryAssertion {
                stmt,
                context: self.context,
            },
            _ => self.mismatch("try_stmt"),
        }
    }

    /// Assert the expression covers exactly this byte span
    pub fn span(self, start: usize, end: usize) -> Self {
        assert_eq!(
            self.expr.span(),
            start..end,
            "{}: Unexpected span for {}",
            self.context,
            summarize(self.expr)
        );
        self
    }

    /// Check if this expression is a block (non-panicking)
    pub fn is_block(&self) -> bool {
        matches!(self.expr, Expr::Block(_))
    }

    /// Check if this expression is a number (non-panicking)
    pub fn is_number(&self) -> bool {
        matches!(self.expr, Expr::Number(_))
    }
}

// ============================================================================
// Block Assertions
// ============================================================================

pub struct BlockAssertion<'a> {
    block: &'a Block,
    context: String,
}

impl<'a> BlockAssertion<'a> {
    fn new(block: &'a Block, context: String) -> Self {
        Self { block, context }
    }

    pub fn expr_count(self, expected: usize) -> Self {
        let actual = self.block.exprs.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} expressions, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize_exprs(&self.block.exprs)
        );
        self
    }

    pub fn empty(self) -> Self {
        self.expr_count(0)
    }

    pub fn expr<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ExprAssertion<'a>),
    {
        assert_index(&self.context, "Expression", index, self.block.exprs.len());
        assertion(ExprAssertion::new(
            &self.block.exprs[index],
            format!("{}.exprs[{}]", self.context, index),
        ));
        self
    }

    /// Assert the block holds only numbers, with these literals in order
    pub fn numbers(self, expected: &[&str]) -> Self {
        let literals: Vec<&str> = self
            .block
            .exprs
            .iter()
            .map(|expr| match expr {
                Expr::Number(n) => n.literal.as_str(),
                other => panic!(
                    "{}: Expected only numbers, found {}",
                    self.context,
                    summarize(other)
                ),
            })
            .collect();
        assert_eq!(literals, expected, "{}: Number literals differ", self.context);
        self
    }
}

// ============================================================================
// Number Assertions
// ============================================================================

pub struct NumberAssertion<'a> {
    number: &'a Number,
    context: String,
}

impl<'a> NumberAssertion<'a> {
    /// Assert exact literal text
    pub fn literal(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.number.literal, &self.context);
        self
    }

    pub fn literal_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string()).assert(&self.number.literal, &self.context);
        self
    }
}

// ============================================================================
// Local Declaration Assertions
// ============================================================================

pub struct LocalAssertion<'a> {
    decl: &'a LocalDecl,
    context: String,
}

impl<'a> LocalAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string())
            .assert(self.decl.name.as_str(), &format!("{}.name", self.context));
        self
    }

    pub fn init<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ExprAssertion<'a>),
    {
        assertion(ExprAssertion::new(
            &self.decl.init,
            format!("{}.init", self.context),
        ));
        self
    }
}

// ============================================================================
// If Assertions
// ============================================================================

pub struct IfAssertion<'a> {
    stmt: &'a IfStmt,
    context: String,
}

impl<'a> IfAssertion<'a> {
    /// Assert on the leading `if` branch
    pub fn if_branch<F>(self, assertion: F) -> Self
    where
        F: FnOnce(BranchAssertion<'a>),
    {
        assertion(BranchAssertion {
            condition: &self.stmt.if_block.condition,
            body: &self.stmt.if_block.body,
            context: format!("{}.if", self.context),
        });
        self
    }

    pub fn elseif_count(self, expected: usize) -> Self {
        let actual = self.stmt.elseif_blocks.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} elseif branches, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn elseif<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BranchAssertion<'a>),
    {
        assert_index(
            &self.context,
            "Elseif",
            index,
            self.stmt.elseif_blocks.len(),
        );
        let branch = &self.stmt.elseif_blocks[index];
        assertion(BranchAssertion {
            condition: &branch.condition,
            body: &branch.body,
            context: format!("{}.elseif[{}]", self.context, index),
        });
        self
    }

    pub fn no_else(self) -> Self {
        assert!(
            self.stmt.else_block.is_none(),
            "{}: Expected no else branch",
            self.context
        );
        self
    }

    pub fn else_body<F>(self, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        let else_block = self
            .stmt
            .else_block
            .as_ref()
            .unwrap_or_else(|| panic!("{}: Expected an else branch", self.context));
        assertion(BlockAssertion::new(
            &else_block.body,
            format!("{}.else", self.context),
        ));
        self
    }
}

/// A condition and its block, shared by `if` and `elseif` branches
pub struct BranchAssertion<'a> {
    condition: &'a Expr,
    body: &'a Block,
    context: String,
}

impl<'a> BranchAssertion<'a> {
    pub fn condition<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ExprAssertion<'a>),
    {
        assertion(ExprAssertion::new(
            self.condition,
            format!("{}.condition", self.context),
        ));
        self
    }

    pub fn body<F>(self, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assertion(BlockAssertion::new(
            self.body,
            format!("{}.body", self.context),
        ));
        self
    }
}

// ============================================================================
// Match Assertions
// ============================================================================

pub struct MatchAssertion<'a> {
    stmt: &'a MatchStmt,
    context: String,
}

impl<'a> MatchAssertion<'a> {
    pub fn scrutinee<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ExprAssertion<'a>),
    {
        assertion(ExprAssertion::new(
            &self.stmt.scrutinee,
            format!("{}.scrutinee", self.context),
        ));
        self
    }

    pub fn case_count(self, expected: usize) -> Self {
        let actual = self.stmt.block.cases.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} cases, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn case<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(CaseAssertion<'a>),
    {
        assert_index(&self.context, "Case", index, self.stmt.block.cases.len());
        assertion(CaseAssertion {
            case: &self.stmt.block.cases[index],
            context: format!("{}.cases[{}]", self.context, index),
        });
        self
    }
}

pub struct CaseAssertion<'a> {
    case: &'a MatchCase,
    context: String,
}

impl<'a> CaseAssertion<'a> {
    /// Assert the case pattern is the `default` marker
    pub fn is_default(self) -> Self {
        assert!(
            self.case.pattern.is_default(),
            "{}: Expected a default case",
            self.context
        );
        self
    }

    pub fn pattern<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ExprAssertion<'a>),
    {
        match &self.case.pattern {
            MatchExpr::Expr(expr) => {
                assertion(ExprAssertion::new(
                    expr,
                    format!("{}.pattern", self.context),
                ));
            }
            MatchExpr::Default { .. } => panic!(
                "{}: Expected an expression pattern, found default",
                self.context
            ),
        }
        self
    }

    pub fn body<F>(self, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assertion(BlockAssertion::new(
            &self.case.body,
            format!("{}.body", self.context),
        ));
        self
    }
}

// ============================================================================
// Try Assertions
// ============================================================================

pub struct TryAssertion<'a> {
    stmt: &'a TryStmt,
    context: String,
}

impl<'a> TryAssertion<'a> {
    pub fn guarded<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ExprAssertion<'a>),
    {
        assertion(ExprAssertion::new(
            &self.stmt.try_block.guarded,
            format!("{}.guarded", self.context),
        ));
        self
    }

    pub fn recovery<F>(self, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assertion(BlockAssertion::new(
            &self.stmt.try_block.recovery,
            format!("{}.recovery", self.context),
        ));
        self
    }

    pub fn no_catch(self) -> Self {
        assert!(
            self.stmt.catch_block.is_none(),
            "{}: Expected no catch block",
            self.context
        );
        self
    }

    fn catch_block(&self) -> &'a CatchBlock {
        self.stmt
            .catch_block
            .as_ref()
            .unwrap_or_else(|| panic!("{}: Expected a catch block", self.context))
    }

    /// Assert the catch binding name, `None` for a catch without one
    pub fn catch_binding(self, expected: Option<&str>) -> Self {
        let actual = self.catch_block().binding.as_ref().map(|b| b.as_str());
        assert_eq!(
            actual, expected,
            "{}: Unexpected catch binding",
            self.context
        );
        self
    }

    pub fn catch_body<F>(self, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        let catch = self.catch_block();
        assertion(BlockAssertion::new(
            &catch.body,
            format!("{}.catch", self.context),
        ));
        self
    }
}
