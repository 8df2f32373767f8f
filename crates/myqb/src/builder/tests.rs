use super::*;
use crate::value::{Raw, Value};

// ==================== SELECT ====================

#[test]
fn select_where_chain_mixes_joiners() {
    let sql = select("test")
        .and_where("id", "=", "1")
        .and_where("test.id", "=", "1")
        .or_where("db.test.id", ">", "2")
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM `test` WHERE `id` = '1' AND `test`.`id` = '1' OR `db`.`test`.`id` > '2';"
    );
}

#[test]
fn select_with_grouped_conditions() {
    let sql = select("test")
        .columns(&["id"])
        .and_where("c", "=", "3")
        .and_where_group(|c| {
            c.and_where("a", "=", "1");
            c.or_where("b", "=", "2");
        })
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT `id` FROM `test` WHERE `c` = '3' AND (`a` = '1' OR `b` = '2');"
    );
}

#[test]
fn select_group_into_empty_where() {
    let sql = select("test")
        .or_where_group(|c| {
            c.and_where("a", "=", "1");
            c.or_where("b", "=", "2");
        })
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT * FROM `test` WHERE (`a` = '1' OR `b` = '2');");
}

#[test]
fn select_empty_group_changes_nothing() {
    let with_group = select("test")
        .and_where("id", "=", "1")
        .and_where_group(|_| {})
        .build()
        .unwrap();
    let without_group = select("test").and_where("id", "=", "1").build().unwrap();
    assert_eq!(with_group, without_group);
}

#[test]
fn select_group_by_and_having() {
    let sql = select("orders")
        .columns(&["user_id"])
        .column_raw("SUM(total) AS total")
        .group_by(&["user_id"])
        .and_having("total", ">", 100i64)
        .or_having_group(|c| {
            c.and_having("cnt", ">=", 5i64);
        })
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT `user_id`, SUM(total) AS total FROM `orders` \
         GROUP BY `user_id` HAVING `total` > 100 OR (`cnt` >= 5);"
    );
}

#[test]
fn select_kitchen_sink() {
    let sql = select("users")
        .distinct()
        .columns(&["users.id", "users.name"])
        .column_raw("COUNT(posts.id) AS post_count")
        .inner_join("posts", "posts.user_id", "users.id")
        .and_where("users.active", "=", 1i64)
        .and_where("users.role", "in", vec!["admin", "editor"])
        .group_by(&["users.id"])
        .and_having("post_count", ">", 3i64)
        .order_by_asc("users.name")
        .limit(10)
        .offset(5)
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT DISTINCT `users`.`id`, `users`.`name`, COUNT(posts.id) AS post_count \
         FROM `users` \
         INNER JOIN `posts` ON `posts`.`user_id` = `users`.`id` \
         WHERE `users`.`active` = 1 AND `users`.`role` IN ('admin', 'editor') \
         GROUP BY `users`.`id` HAVING `post_count` > 3 \
         ORDER BY `users`.`name` ASC LIMIT 10 OFFSET 5;"
    );
}

#[test]
fn select_raw_where_predicate() {
    let sql = select("test")
        .and_where_raw("id = UUID_TO_BIN('x')")
        .or_where_raw("legacy_id IS NOT NULL")
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM `test` WHERE id = UUID_TO_BIN('x') OR legacy_id IS NOT NULL;"
    );
}

#[test]
fn select_column_comparison_via_raw_operand() {
    let sql = select("users")
        .inner_join("posts", "posts.user_id", "users.id")
        .and_where("users.updated_at", ">", Raw::new("`posts`.`created_at`"))
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM `users` INNER JOIN `posts` ON `posts`.`user_id` = `users`.`id` \
         WHERE `users`.`updated_at` > `posts`.`created_at`;"
    );
}

#[test]
fn select_group_error_surfaces_at_build() {
    let result = select("test")
        .and_where_group(|c| {
            c.and_where("age", "between", vec![1i64]);
        })
        .build();
    assert!(result.unwrap_err().is_invalid_condition());
}

// ==================== DELETE ====================

#[test]
fn delete_low_priority() {
    let sql = delete("test").low_priority().build().unwrap();
    assert_eq!(sql, "DELETE LOW_PRIORITY FROM `test`;");
}

#[test]
fn delete_ignore() {
    let sql = delete("test")
        .ignore()
        .and_where("id", "=", "1")
        .build()
        .unwrap();
    assert_eq!(sql, "DELETE IGNORE FROM `test` WHERE `id` = '1';");

    let sql = delete("test")
        .low_priority()
        .ignore()
        .and_where("id", "=", "1")
        .build()
        .unwrap();
    assert_eq!(sql, "DELETE LOW_PRIORITY IGNORE FROM `test` WHERE `id` = '1';");
}

#[test]
fn delete_quick() {
    let sql = delete("test")
        .quick()
        .and_where("id", "=", "1")
        .build()
        .unwrap();
    assert_eq!(sql, "DELETE QUICK FROM `test` WHERE `id` = '1';");
}

#[test]
fn delete_order_by() {
    let sql = delete("test")
        .and_where("id", "=", "1")
        .order_by("id")
        .build()
        .unwrap();
    assert_eq!(sql, "DELETE FROM `test` WHERE `id` = '1' ORDER BY `id`;");

    let sql = delete("test")
        .and_where("id", "=", "1")
        .order_by_desc("id")
        .build()
        .unwrap();
    assert_eq!(sql, "DELETE FROM `test` WHERE `id` = '1' ORDER BY `id` DESC;");

    let sql = delete("test")
        .and_where("id", "=", "1")
        .order_by_asc("db.test.id")
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "DELETE FROM `test` WHERE `id` = '1' ORDER BY `db`.`test`.`id` ASC;"
    );
}

#[test]
fn delete_limit() {
    let sql = delete("test")
        .and_where("id", ">", "1")
        .limit(10)
        .build()
        .unwrap();
    assert_eq!(sql, "DELETE FROM `test` WHERE `id` > '1' LIMIT 10;");
}

// ==================== UPDATE ====================

#[test]
fn update_with_grouped_conditions() {
    let sql = update("test")
        .set("status", "archived")
        .and_where("owner", "=", 7i64)
        .or_where_group(|c| {
            c.and_where("status", "=", "draft");
            c.and_where("updated_at", "=", Value::Null);
        })
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "UPDATE `test` SET `status` = 'archived' \
         WHERE `owner` = 7 OR (`status` = 'draft' AND `updated_at` IS NULL);"
    );
}

// ==================== INSERT ====================

#[test]
fn insert_three_rows() {
    let sql = insert("test")
        .set("a", 1i64)
        .row(vec![Value::Int(2)])
        .row(vec![Value::Int(3)])
        .build()
        .unwrap();
    assert_eq!(sql, "INSERT INTO `test` (`a`) VALUES (1), (2), (3);");
}

// ==================== Rendering properties ====================

#[test]
fn builders_render_idempotently() {
    let qb = select("test")
        .and_where("id", "in", vec![1i64, 2])
        .and_where_group(|c| {
            c.and_where("a", "=", "1");
        });
    assert_eq!(qb.build().unwrap(), qb.build().unwrap());
}

#[test]
fn nested_group_parentheses_match_depth() {
    let sql = select("test")
        .and_where_group(|c| {
            c.and_where("a", "=", "1");
            c.or_where_group(|c| {
                c.and_where("b", "=", "2");
                c.or_where_group(|c| {
                    c.and_where("d", "=", "4");
                });
            });
        })
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM `test` WHERE (`a` = '1' OR (`b` = '2' OR (`d` = '4')));"
    );
    assert_eq!(sql.matches('(').count(), 3);
    assert_eq!(sql.matches(')').count(), 3);
}
