//! Translation of catalog query parameters into a storage condition.

use std::collections::BTreeMap;

use sea_orm::{ColumnTrait, Condition};

use crate::{
    entity::products::Column,
    routes::params::ProductQuery,
    validation::{ErrorKind, FieldError, ValidationError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProductField {
    Category,
    Occasion,
    Color,
    Price,
}

impl ProductField {
    fn column(self) -> Column {
        match self {
            ProductField::Category => Column::Category,
            ProductField::Occasion => Column::Occasion,
            ProductField::Color => Column::Color,
            ProductField::Price => Column::Price,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    Equals(String),
    /// Inclusive on both sides; a missing side is unbounded.
    Range { min: Option<f64>, max: Option<f64> },
}

/// Field-to-constraint mapping selecting the products a listing returns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    constraints: BTreeMap<ProductField, Constraint>,
}

impl ProductFilter {
    pub fn from_query(query: &ProductQuery) -> Result<Self, ValidationError> {
        let mut constraints = BTreeMap::new();

        let equalities = [
            (ProductField::Category, &query.category),
            (ProductField::Occasion, &query.occasion),
            (ProductField::Color, &query.color),
        ];
        for (field, value) in equalities {
            if let Some(value) = value.as_ref().filter(|v| !v.is_empty()) {
                constraints.insert(field, Constraint::Equals(value.clone()));
            }
        }

        let min = finite_bound("min_price", query.min_price)?;
        let max = finite_bound("max_price", query.max_price)?;
        if min.is_some() || max.is_some() {
            constraints.insert(ProductField::Price, Constraint::Range { min, max });
        }

        Ok(Self { constraints })
    }

    pub fn get(&self, field: ProductField) -> Option<&Constraint> {
        self.constraints.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn to_condition(&self) -> Condition {
        self.constraints
            .iter()
            .fold(Condition::all(), |condition, (field, constraint)| {
                let column = field.column();
                match constraint {
                    Constraint::Equals(value) => condition.add(column.eq(value.as_str())),
                    Constraint::Range { min, max } => {
                        let condition = match min {
                            Some(min) => condition.add(column.gte(*min)),
                            None => condition,
                        };
                        match max {
                            Some(max) => condition.add(column.lte(*max)),
                            None => condition,
                        }
                    }
                }
            })
    }
}

fn finite_bound(name: &str, value: Option<f64>) -> Result<Option<f64>, ValidationError> {
    match value {
        Some(v) if !v.is_finite() => Err(ValidationError::single(FieldError::new(
            &["query", name],
            ErrorKind::FloatType,
            "Input should be a finite number",
        ))),
        other => Ok(other),
    }
}
