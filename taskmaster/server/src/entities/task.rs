use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use taskmaster_core as domain;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub priority: Priority,
    pub deadline: Option<Date>,
    pub completed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Priority as stored in the `tasks.priority` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Priority {
    #[sea_orm(string_value = "High")]
    High,
    #[sea_orm(string_value = "Medium")]
    Medium,
    #[sea_orm(string_value = "Low")]
    Low,
}

impl From<domain::Priority> for Priority {
    fn from(priority: domain::Priority) -> Self {
        match priority {
            domain::Priority::High => Priority::High,
            domain::Priority::Medium => Priority::Medium,
            domain::Priority::Low => Priority::Low,
        }
    }
}

impl From<Priority> for domain::Priority {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::High => domain::Priority::High,
            Priority::Medium => domain::Priority::Medium,
            Priority::Low => domain::Priority::Low,
        }
    }
}

impl From<Model> for domain::Task {
    fn from(model: Model) -> Self {
        domain::Task {
            id: model.id,
            title: model.title,
            description: model.description,
            priority: model.priority.into(),
            deadline: model.deadline,
            completed: model.completed,
        }
    }
}

impl From<domain::Task> for ActiveModel {
    fn from(task: domain::Task) -> Self {
        ActiveModel {
            id: Set(task.id),
            title: Set(task.title),
            description: Set(task.description),
            priority: Set(task.priority.into()),
            deadline: Set(task.deadline),
            completed: Set(task.completed),
        }
    }
}
