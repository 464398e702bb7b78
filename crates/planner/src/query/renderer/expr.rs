use crate::query::{
    ast::expr::{BinaryOp, Expr, Ident},
    renderer::{Render, Renderer},
};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) {
        match self {
            Expr::Identifier(ident) => ident.render(r),
            Expr::Wildcard(qualifier) => {
                if let Some(qualifier) = qualifier {
                    r.sql.push_str(&r.dialect.quote_identifier(qualifier));
                    r.sql.push('.');
                }
                r.sql.push('*');
            }
            Expr::Parameter(name) => r.add_named_param(name),
            Expr::BinaryOp(op) => op.render(r),
            Expr::IsNull { expr, negated } => {
                r.sql.push('(');
                expr.render(r);
                r.sql
                    .push_str(if *negated { " IS NOT NULL)" } else { " IS NULL)" });
            }
        }
    }
}

impl Render for Ident {
    fn render(&self, r: &mut Renderer) {
        if let Some(qualifier) = &self.qualifier {
            r.sql.push_str(&r.dialect.quote_identifier(qualifier));
            r.sql.push('.');
        }
        r.sql.push_str(&r.dialect.quote_identifier(&self.name));
    }
}

impl Render for BinaryOp {
    fn render(&self, r: &mut Renderer) {
        r.sql.push('(');
        self.left.render(r);
        r.sql.push(' ');
        r.sql.push_str(self.op.as_str());
        r.sql.push(' ');
        self.right.render(r);
        r.sql.push(')');
    }
}

#[cfg(test)]
mod tests {
    use model::core::value::Value;
    use std::collections::BTreeMap;

    use crate::query::{
        ast::expr::{BinaryOperator, Expr},
        dialect::{MySql, Postgres},
        param, qualified,
        renderer::{Render, Renderer},
    };

    #[test]
    fn test_render_comparison_with_bound_param() {
        let bindings = BTreeMap::from([("id".to_string(), Value::Int(7))]);
        let expr = Expr::binary(qualified("o", "id"), BinaryOperator::Eq, param("id"));

        let mut renderer = Renderer::with_bindings(&Postgres, &bindings);
        expr.render(&mut renderer);
        let (sql, params) = renderer.finish();

        assert_eq!(sql, r#"("o"."id" = $1)"#);
        assert_eq!(params, vec![Value::Int(7)]);
    }

    #[test]
    fn test_render_named_params_in_order() {
        let mut bindings = BTreeMap::new();
        bindings.insert("b".to_string(), Value::Int(2));
        bindings.insert("a".to_string(), Value::Int(1));

        let expr = Expr::binary(qualified("o", "d"), BinaryOperator::Lt, param("b"))
            .or(Expr::binary(qualified("o", "d"), BinaryOperator::Gt, param("a")));

        let mut renderer = Renderer::with_bindings(&Postgres, &bindings);
        expr.render(&mut renderer);
        assert!(renderer.unbound().is_empty());
        let (sql, params) = renderer.finish();

        assert_eq!(sql, r#"(("o"."d" < $1) OR ("o"."d" > $2))"#);
        assert_eq!(params, vec![Value::Int(2), Value::Int(1)]);
    }

    #[test]
    fn test_render_unbound_param_is_recorded() {
        let bindings = BTreeMap::new();
        let expr = Expr::binary(qualified("o", "d"), BinaryOperator::Lt, param("missing"));

        let mut renderer = Renderer::with_bindings(&MySql, &bindings);
        expr.render(&mut renderer);

        assert_eq!(renderer.unbound(), &["missing".to_string()]);
        let (sql, params) = renderer.finish();
        assert_eq!(sql, "(`o`.`d` < :missing)");
        assert!(params.is_empty());
    }

    #[test]
    fn test_render_is_null() {
        let mut renderer = Renderer::new(&MySql);
        qualified("o", "deleted_at").is_not_null().render(&mut renderer);
        let (sql, params) = renderer.finish();

        assert_eq!(sql, "(`o`.`deleted_at` IS NOT NULL)");
        assert!(params.is_empty());
    }
}
