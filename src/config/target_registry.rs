// ==========================================
// 智能数据导入 - 目标 Schema 注册表
// ==========================================
// 职责: 所有可导入集合的字段定义（必填/可选/别名/类型/缺省值）
// 红线: 纯静态配置数据，只读；分类器与映射器按此表通用遍历
// ==========================================

use crate::domain::types::{FieldKind, TargetId};

// ==========================================
// FieldDefault - 字段缺省值
// ==========================================
// 源数据缺失或为空时使用
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDefault {
    None,               // 按类型取空值（"" / 0 / false / []）
    Text(&'static str), // 固定文本（含占位符，如 "Untitled"）
    Boolean(bool),      // 固定布尔
    Today,              // 当天日期
}

// ==========================================
// FieldSpec - 字段定义
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub default: FieldDefault,
    pub aliases: &'static [&'static str],
}

impl FieldSpec {
    const fn new(name: &'static str, kind: FieldKind, aliases: &'static [&'static str]) -> Self {
        let default = match kind {
            FieldKind::Date => FieldDefault::Today,
            FieldKind::Boolean => FieldDefault::Boolean(false),
            _ => FieldDefault::None,
        };
        Self {
            name,
            kind,
            default,
            aliases,
        }
    }

    const fn text(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self::new(name, FieldKind::Text, aliases)
    }

    const fn or(mut self, default: FieldDefault) -> Self {
        self.default = default;
        self
    }
}

// ==========================================
// TargetSchema - 导入目标定义
// ==========================================
// 不变量: required 与 optional 不相交；别名只挂在已声明字段上
#[derive(Debug)]
pub struct TargetSchema {
    pub id: TargetId,
    pub required: &'static [FieldSpec],
    pub optional: &'static [FieldSpec],
}

impl TargetSchema {
    /// 全部字段（必填在前，按声明顺序）
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.required.iter().chain(self.optional.iter())
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> {
        self.required.iter().map(|f| f.name)
    }

    pub fn optional_fields(&self) -> impl Iterator<Item = &'static str> {
        self.optional.iter().map(|f| f.name)
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().find(|f| f.name == name)
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|f| f.name == name)
    }

    pub fn aliases_for(&self, name: &str) -> &'static [&'static str] {
        self.field(name).map(|f| f.aliases).unwrap_or(&[])
    }

    pub fn field_count(&self) -> usize {
        self.required.len() + self.optional.len()
    }
}

// ==========================================
// 注册表数据
// ==========================================
// 顺序与 TargetId::ALL 一致（评分并列时的裁决顺序）

const TAGS: &[&str] = &["labels", "keywords", "categories"];
const CREATED_AT: &[&str] = &["added", "date_added", "created", "date_created"];

static WEBSITES: TargetSchema = TargetSchema {
    id: TargetId::Websites,
    required: &[
        FieldSpec::text("name", &["title", "site_name", "website", "label"])
            .or(FieldDefault::Text("Untitled")),
        FieldSpec::text(
            "url",
            &["link", "href", "address", "homepage", "website_url", "domain"],
        ),
    ],
    optional: &[
        FieldSpec::text("category", &["group", "folder", "type"]).or(FieldDefault::Text("General")),
        FieldSpec::text("status", &["state"]).or(FieldDefault::Text("active")),
        FieldSpec::text("description", &["desc", "summary", "notes"]),
        FieldSpec::new("tags", FieldKind::List, TAGS),
        FieldSpec::new("favorite", FieldKind::Boolean, &["starred", "pinned", "bookmarked"]),
        FieldSpec::new("created_at", FieldKind::Date, CREATED_AT),
        FieldSpec::new("updated_at", FieldKind::Date, &["modified", "last_modified", "updated"]),
    ],
};

static TASKS: TargetSchema = TargetSchema {
    id: TargetId::Tasks,
    required: &[FieldSpec::text("name", &["title", "task", "todo", "subject"])
        .or(FieldDefault::Text("Untitled"))],
    optional: &[
        FieldSpec::text("description", &["details", "notes", "desc", "body"]),
        FieldSpec::text("status", &["state", "progress"]).or(FieldDefault::Text("todo")),
        FieldSpec::text("priority", &["importance", "urgency", "prio"])
            .or(FieldDefault::Text("medium")),
        FieldSpec::new("due_date", FieldKind::Date, &["due", "deadline", "due_by"]),
        FieldSpec::new("tags", FieldKind::List, TAGS),
        FieldSpec::new("completed", FieldKind::Boolean, &["done", "finished", "is_done"]),
        FieldSpec::new("created_at", FieldKind::Date, CREATED_AT),
    ],
};

static CREDENTIALS: TargetSchema = TargetSchema {
    id: TargetId::Credentials,
    required: &[
        FieldSpec::text("service", &["name", "site", "website", "app", "platform", "account"])
            .or(FieldDefault::Text("Unnamed")),
        FieldSpec::text("username", &["user", "login", "email", "account_name"]),
        FieldSpec::text("password", &["pass", "pwd", "secret", "passcode"]),
    ],
    optional: &[
        FieldSpec::text("url", &["link", "login_url", "address"]),
        FieldSpec::text("category", &["group", "folder", "type"]).or(FieldDefault::Text("General")),
        FieldSpec::text("notes", &["note", "comment", "comments"]),
        FieldSpec::new("tags", FieldKind::List, TAGS),
        FieldSpec::new("created_at", FieldKind::Date, CREATED_AT),
    ],
};

static CONTACTS: TargetSchema = TargetSchema {
    id: TargetId::Contacts,
    required: &[FieldSpec::text("name", &["full_name", "contact", "person", "display_name"])
        .or(FieldDefault::Text("Unnamed"))],
    optional: &[
        FieldSpec::text("email", &["mail", "e_mail", "email_address"]),
        FieldSpec::text("phone", &["telephone", "mobile", "cell", "phone_number", "tel"]),
        FieldSpec::text("company", &["organization", "org", "employer"]),
        FieldSpec::text("job_title", &["position", "role"]),
        FieldSpec::text("address", &["street", "location"]),
        FieldSpec::text("notes", &["note", "comment"]),
        FieldSpec::new("tags", FieldKind::List, &["labels", "groups"]),
        FieldSpec::new("favorite", FieldKind::Boolean, &["starred", "vip"]),
        FieldSpec::new("created_at", FieldKind::Date, CREATED_AT),
    ],
};

static NOTES: TargetSchema = TargetSchema {
    id: TargetId::Notes,
    required: &[FieldSpec::text(
        "content",
        &["body", "text", "note", "notes", "description", "details"],
    )],
    optional: &[
        FieldSpec::text("title", &["subject", "heading", "name"]).or(FieldDefault::Text("Untitled")),
        FieldSpec::text("category", &["folder", "notebook", "group"])
            .or(FieldDefault::Text("General")),
        FieldSpec::new("tags", FieldKind::List, TAGS),
        FieldSpec::new("pinned", FieldKind::Boolean, &["starred", "favorite"]),
        FieldSpec::new("created_at", FieldKind::Date, CREATED_AT),
    ],
};

static EXPENSES: TargetSchema = TargetSchema {
    id: TargetId::Expenses,
    required: &[
        FieldSpec::text("description", &["merchant", "payee", "memo", "vendor"]),
        FieldSpec::new("amount", FieldKind::Number, &["price", "cost", "total", "value", "sum"]),
    ],
    optional: &[
        FieldSpec::text("currency", &["curr", "ccy"]).or(FieldDefault::Text("USD")),
        FieldSpec::text("category", &["group", "type"]).or(FieldDefault::Text("Other")),
        FieldSpec::new("date", FieldKind::Date, &["spent_on", "transaction_date", "paid_on"]),
        FieldSpec::new("recurring", FieldKind::Boolean, &["repeat", "subscription"]),
        FieldSpec::new("tags", FieldKind::List, TAGS),
    ],
};

static REGISTRY: [&TargetSchema; 6] = [
    &WEBSITES,
    &TASKS,
    &CREDENTIALS,
    &CONTACTS,
    &NOTES,
    &EXPENSES,
];

/// 全部导入目标定义（注册表枚举顺序）
pub fn registry() -> &'static [&'static TargetSchema] {
    &REGISTRY
}

/// 按目标标识取定义
pub fn schema(id: TargetId) -> &'static TargetSchema {
    match id {
        TargetId::Websites => &WEBSITES,
        TargetId::Tasks => &TASKS,
        TargetId::Credentials => &CREDENTIALS,
        TargetId::Contacts => &CONTACTS,
        TargetId::Notes => &NOTES,
        TargetId::Expenses => &EXPENSES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_order_matches_target_ids() {
        let ids: Vec<TargetId> = registry().iter().map(|s| s.id).collect();
        assert_eq!(ids, TargetId::ALL.to_vec());
        for id in TargetId::ALL {
            assert_eq!(schema(id).id, id);
        }
    }

    #[test]
    fn test_required_and_optional_are_disjoint() {
        for schema in registry() {
            let required: HashSet<&str> = schema.required_fields().collect();
            for name in schema.optional_fields() {
                assert!(
                    !required.contains(name),
                    "{}: {} 同时出现在必填与可选中",
                    schema.id,
                    name
                );
            }
        }
    }

    #[test]
    fn test_every_schema_has_required_fields() {
        for schema in registry() {
            assert!(!schema.required.is_empty(), "{} 缺少必填字段", schema.id);
        }
    }

    #[test]
    fn test_field_names_unique_per_schema() {
        for schema in registry() {
            let mut seen = HashSet::new();
            for field in schema.fields() {
                assert!(seen.insert(field.name), "{}: 重复字段 {}", schema.id, field.name);
            }
            assert_eq!(seen.len(), schema.field_count());
        }
    }

    #[test]
    fn test_aliases_are_lowercase() {
        for schema in registry() {
            for field in schema.fields() {
                for alias in field.aliases {
                    assert_eq!(*alias, alias.to_lowercase(), "{}.{}", schema.id, field.name);
                }
            }
        }
    }

    #[test]
    fn test_date_fields_default_to_today() {
        for schema in registry() {
            for field in schema.fields().filter(|f| f.kind == FieldKind::Date) {
                assert_eq!(field.default, FieldDefault::Today, "{}.{}", schema.id, field.name);
            }
        }
    }

    #[test]
    fn test_placeholder_defaults_on_required_fields() {
        assert_eq!(
            schema(TargetId::Tasks).field("name").map(|f| f.default),
            Some(FieldDefault::Text("Untitled"))
        );
        assert_eq!(
            schema(TargetId::Contacts).field("name").map(|f| f.default),
            Some(FieldDefault::Text("Unnamed"))
        );
        assert_eq!(
            schema(TargetId::Websites).field("url").map(|f| f.default),
            Some(FieldDefault::None)
        );
    }

    #[test]
    fn test_aliases_for_unknown_field_is_empty() {
        let websites = schema(TargetId::Websites);
        assert!(websites.aliases_for("nonexistent").is_empty());
        assert!(websites.aliases_for("url").contains(&"link"));
        assert!(websites.is_required("url"));
        assert!(!websites.is_required("category"));
    }
}
