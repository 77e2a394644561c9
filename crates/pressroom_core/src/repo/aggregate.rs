//! Hand-written join/group query builder for has-many-through loads.
//!
//! # Responsibility
//! - Build the base → link → target LEFT JOIN for one aggregate shape.
//! - Fold joined rows into per-base-row groups of raw values.
//!
//! # Invariants
//! - The first column of `base_columns` and `target_columns` is the table's
//!   primary key.
//! - Rows are ordered by base id, so grouping folds consecutive rows only.
//! - A base row without links still yields one group with no target rows
//!   (LEFT JOIN, target id NULL).

use crate::model::fields;
use crate::repo::RepoResult;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};

/// Static description of one base/link/target aggregate shape.
#[derive(Debug, Clone, Copy)]
pub struct AggregateQuery {
    pub base_table: &'static str,
    pub base_columns: &'static [&'static str],
    pub link_table: &'static str,
    pub link_base_key: &'static str,
    pub link_target_key: &'static str,
    pub target_table: &'static str,
    pub target_columns: &'static [&'static str],
}

/// Composable row filter applied to the base table.
#[derive(Debug, Clone)]
pub struct Filter {
    clause: String,
    bind: Vec<Value>,
}

impl Filter {
    /// Exact-match filter on one base-table column.
    pub fn base_eq(column: &str, value: Value) -> Self {
        Self {
            clause: format!("base.{column} = ?"),
            bind: vec![value],
        }
    }
}

/// One folded row group: the base row plus its joined target rows.
#[derive(Debug, Clone)]
pub struct RowGroup {
    pub base_id: i64,
    /// Raw values in `base_columns` order.
    pub base_values: Vec<Value>,
    /// Raw values in `target_columns` order, one entry per joined target row.
    pub target_rows: Vec<Vec<Value>>,
}

impl AggregateQuery {
    /// Runs the join under the given filter and folds rows by base id.
    pub fn fetch_grouped(&self, conn: &Connection, filter: &Filter) -> RepoResult<Vec<RowGroup>> {
        let sql = self.to_sql(filter);
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(filter.bind.iter().cloned()))?;

        let base_len = self.base_columns.len();
        let target_len = self.target_columns.len();
        let mut groups: Vec<RowGroup> = Vec::new();

        while let Some(row) = rows.next()? {
            let mut base_values = Vec::with_capacity(base_len);
            for index in 0..base_len {
                base_values.push(row.get::<_, Value>(index)?);
            }
            let base_id = fields::require_integer("id", base_values[0].clone())?;

            let mut target_values = Vec::with_capacity(target_len);
            for offset in 0..target_len {
                target_values.push(row.get::<_, Value>(base_len + offset)?);
            }
            // NULL target id means the LEFT JOIN matched nothing.
            let has_target = !matches!(target_values[0], Value::Null);

            match groups.last_mut() {
                Some(group) if group.base_id == base_id => {
                    if has_target {
                        group.target_rows.push(target_values);
                    }
                }
                _ => {
                    let target_rows = if has_target {
                        vec![target_values]
                    } else {
                        Vec::new()
                    };
                    groups.push(RowGroup {
                        base_id,
                        base_values,
                        target_rows,
                    });
                }
            }
        }

        Ok(groups)
    }

    fn to_sql(&self, filter: &Filter) -> String {
        let mut columns = Vec::with_capacity(self.base_columns.len() + self.target_columns.len());
        for column in self.base_columns {
            columns.push(format!("base.{column}"));
        }
        for column in self.target_columns {
            columns.push(format!("target.{column}"));
        }

        format!(
            "SELECT {columns}
             FROM {base} AS base
             LEFT JOIN {link} AS link ON link.{base_key} = base.id
             LEFT JOIN {target} AS target ON target.id = link.{target_key}
             WHERE {clause}
             ORDER BY base.id ASC, link.id ASC;",
            columns = columns.join(", "),
            base = self.base_table,
            link = self.link_table,
            base_key = self.link_base_key,
            target = self.target_table,
            target_key = self.link_target_key,
            clause = filter.clause,
        )
    }
}
