use crate::{
    error::SyntaxError,
    interpreter::{
        evaluator::{
            binary::{core::ArithmeticOperator, scalar::eval_scalar_op},
            core::{Evaluator, LineResult},
            function::core::Builtin,
        },
        lexer::Token,
        value::core::Value,
    },
};

impl Evaluator<'_, '_> {
    /// Evaluates a unary expression.
    ///
    /// A run of leading signs is folded into a single factor: every `-`
    /// flips it and `+` leaves it alone, so `--3` and `-+-3` are both `3`.
    /// The factor multiplies the primary, which also turns a boolean primary
    /// into `1` or `0`.
    ///
    /// Grammar:
    /// ```text
    ///     unary := ("+" | "-")* primary
    /// ```
    pub(crate) fn eval_unary(&mut self) -> LineResult<Value> {
        let position = self.position;
        let mut sign: i64 = 1;

        loop {
            match self.current {
                Some(Token::Minus) => {
                    sign = -sign;
                    self.advance()?;
                },
                Some(Token::Plus) => self.advance()?,
                _ => break,
            }
        }

        let value = self.eval_primary()?;
        Ok(eval_scalar_op(ArithmeticOperator::Mul, Value::from(sign), value, position)?)
    }

    /// Evaluates a primary expression.
    ///
    /// Primary expressions are:
    /// - integer and real literals, which may not be followed directly by a
    ///   variable or `=`,
    /// - variables, read or reassigned in place,
    /// - builtin function calls,
    /// - parenthesized comparisons.
    ///
    /// Grammar:
    /// ```text
    ///     primary := NUMBER
    ///              | VAR ( "=" assignment )?
    ///              | FUNCTION "(" comparison ("," comparison)? ")"
    ///              | "(" comparison ")"
    /// ```
    pub(crate) fn eval_primary(&mut self) -> LineResult<Value> {
        let position = self.position;

        match self.current.clone() {
            Some(Token::Integer(n)) => self.eval_literal(Value::Integer(n)),
            Some(Token::Real(r)) => self.eval_literal(Value::Real(r)),
            Some(Token::Variable(name)) => self.eval_variable(name, position),
            Some(Token::Function(builtin)) => self.eval_function_call(builtin, position),
            Some(Token::LParen) => self.eval_grouping(),
            _ => Err(self.unexpected("a number, variable, function call or '('").into()),
        }
    }

    fn eval_literal(&mut self, value: Value) -> LineResult<Value> {
        self.advance()?;

        if matches!(self.current, Some(Token::Variable(_) | Token::Assign)) {
            return Err(self.unexpected("an operator after a number").into());
        }

        Ok(value)
    }

    /// Evaluates a variable in primary position.
    ///
    /// A bound variable followed by `=` is reassigned: the right-hand side is
    /// evaluated with the top-level assignment rule, stored and returned.
    /// Such an assignment is rejected when the token before the variable was
    /// `+`, `-`, `*` or `/`, so `(x = 5)` and `1 < x = 5` are fine while
    /// `1 + x = 5` is not. Unbound variables cannot be created here.
    ///
    /// # Errors
    /// - `SyntaxError::AssignmentNotAllowed` for a rejected assignment or an
    ///   assignment to an unbound variable.
    /// - `RuntimeError::UnknownVariable` for reading an unbound variable.
    fn eval_variable(&mut self, name: String, position: usize) -> LineResult<Value> {
        self.advance()?;

        if self.current == Some(Token::Assign) {
            let after_operator = self.before_last
                                     .as_ref()
                                     .is_some_and(Token::is_arithmetic_operator);

            if after_operator || !self.variables.contains(&name) {
                return Err(SyntaxError::AssignmentNotAllowed { name,
                                                               position: self.position, }.into());
            }
            self.advance()?;

            let value = self.eval_assignment()?;
            self.variables.set(&name, value.clone());
            return Ok(value);
        }

        Ok(self.variables.get(&name, position)?)
    }

    /// Evaluates a call of a builtin function.
    ///
    /// Exactly [`Builtin::arity`] comma-separated arguments are read; each is a
    /// full comparison. A call cannot be the target of an assignment, so an
    /// `=` after the closing parenthesis is an error, reported before the
    /// function is applied.
    fn eval_function_call(&mut self, builtin: Builtin, position: usize) -> LineResult<Value> {
        self.advance()?;
        self.expect(&Token::LParen, "'(' after function name")?;

        let mut args = Vec::with_capacity(builtin.arity());
        args.push(self.eval_comparison()?);
        for _ in 1..builtin.arity() {
            self.expect(&Token::Comma, "',' between arguments")?;
            args.push(self.eval_comparison()?);
        }

        self.expect(&Token::RParen, "')' after arguments")?;

        if self.current == Some(Token::Assign) {
            return Err(SyntaxError::AssignmentToFunctionCall { function: builtin.name()
                                                                                .to_string(),
                                                               position: self.position, }.into());
        }

        Ok(builtin.call(&args, position)?)
    }

    fn eval_grouping(&mut self) -> LineResult<Value> {
        self.advance()?;
        let value = self.eval_comparison()?;
        self.expect(&Token::RParen, "')'")?;
        Ok(value)
    }
}
