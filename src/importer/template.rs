// ==========================================
// 智能数据导入 - 空白模板生成
// ==========================================
// 格式: 表头行（必填字段在前，可选字段在后，逗号分隔）
//       + 一行等列数的空白行
// ==========================================

use crate::config::target_registry::TargetSchema;

/// 生成目标类型的空白 CSV 模板
pub fn generate(schema: &TargetSchema) -> String {
    let header: Vec<&str> = schema.fields().map(|field| field.name).collect();
    let blank_row = ",".repeat(header.len().saturating_sub(1));

    format!("{}\n{}\n", header.join(","), blank_row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema;
    use crate::domain::TargetId;

    #[test]
    fn test_websites_template() {
        let template = generate(schema(TargetId::Websites));
        assert_eq!(
            template,
            "name,url,category,status,description,tags,favorite,created_at,updated_at\n,,,,,,,,\n"
        );
    }

    #[test]
    fn test_blank_row_matches_column_count() {
        for target in TargetId::ALL {
            let schema = schema(target);
            let template = generate(schema);
            let lines: Vec<&str> = template.lines().collect();

            assert_eq!(lines.len(), 2, "{}", target);
            assert_eq!(lines[0].split(',').count(), schema.field_count());
            assert_eq!(lines[1].split(',').count(), schema.field_count());
            assert!(lines[1].chars().all(|c| c == ','));
        }
    }

    #[test]
    fn test_required_fields_lead() {
        let template = generate(schema(TargetId::Credentials));
        assert!(template.starts_with("service,username,password,"));
    }
}
