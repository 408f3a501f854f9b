use querykit::{IdentPolicy, QueryBuilder, Value, table};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("querykit=debug")
        .try_init();
}

fn assert_no_drop(sql: &str) {
    assert!(!sql.contains("DROP TABLE"), "injected statement survived: {sql}");
    assert!(
        !sql.to_ascii_lowercase().contains("drop"),
        "keyword survived: {sql}"
    );
}

#[test]
fn table_name_injection() {
    init_tracing();
    let query = table("users; DROP TABLE accounts; --").build();
    assert_eq!(query.sql(), r#"select * from "usersTABLEaccounts""#);
    assert_no_drop(query.sql());
}

#[test]
fn column_injection() {
    init_tracing();
    let mut qb = table("users");
    qb.select(["name, email; DROP TABLE accounts; --"]);
    let query = qb.build();
    assert_eq!(query.sql(), r#"select "nameemailTABLEaccounts" from users"#);
    assert_no_drop(query.sql());
}

#[test]
fn where_column_injection() {
    init_tracing();
    let mut qb = table("users");
    qb.and_where("id; DROP TABLE accounts; --", "=", 1);
    let query = qb.build();
    assert_eq!(query.sql(), r#"select * from users where "idTABLEaccounts" = $1"#);
    assert_no_drop(query.sql());
}

#[test]
fn operator_injection_keeps_syntax_but_not_keywords() {
    init_tracing();
    let mut qb = table("users");
    qb.and_where("id", "= 1; drop table accounts; --", 1);
    let query = qb.build();
    assert_eq!(
        query.sql(),
        "select * from users where id = 1;  table accounts; -- $1"
    );
    assert_no_drop(query.sql());
}

#[test]
fn order_by_injection() {
    init_tracing();
    let mut qb = table("users");
    qb.order_by("name; DROP TABLE accounts; --");
    let query = qb.build();
    assert_eq!(
        query.sql(),
        r#"select * from users order by "nameTABLEaccounts""#
    );
    assert_no_drop(query.sql());
}

#[test]
fn join_table_injection() {
    init_tracing();
    let mut qb = table("users");
    qb.left_join("accounts; DROP TABLE logs; --", "accounts.id = users.account_id");
    let query = qb.build();
    assert_eq!(
        query.sql(),
        r#"select * from users LEFT JOIN "accountsTABLElogs" on accounts.id = users.account_id"#
    );
    assert_no_drop(query.sql());
}

#[test]
fn join_condition_injection() {
    init_tracing();
    let mut qb = table("users");
    qb.left_join("accounts", "accounts.id = users.account_id; DROP TABLE logs; --");
    let query = qb.build();
    assert!(!query.sql().contains("DROP TABLE logs"));
    assert_no_drop(query.sql());
}

#[test]
fn nested_keywords_do_not_reassemble() {
    init_tracing();
    let mut qb = table("users");
    qb.order_by("DRdropOP").and_where("id", "dRdRoPoPop", 1);
    let query = qb.build();
    assert_no_drop(query.sql());
}

#[test]
fn mutation_names_are_filtered() {
    init_tracing();
    let mut qb = table("users");
    qb.insert([("name; DROP TABLE accounts", "x")]);
    assert_no_drop(qb.build().sql());

    qb.update([("name; DROP TABLE accounts", "x")])
        .and_where("id", "=", 1);
    assert_no_drop(qb.build().sql());
}

#[test]
fn values_are_bound_not_inlined() {
    init_tracing();
    let payload = "'; DROP TABLE accounts; --";
    let mut qb = table("users");
    qb.and_where("name", "=", payload);
    let query = qb.build();
    assert_eq!(query.sql(), "select * from users where name = $1");
    assert_eq!(query.params(), &[Value::from(payload)]);
}

#[test]
fn quotes_in_names_are_never_verbatim() {
    init_tracing();
    let mut qb = QueryBuilder::new();
    qb.table(r#"us"ers"#);
    assert_eq!(qb.build().sql(), r#"select * from "users""#);
}

#[test]
fn allowlist_still_filters_invalid_names() {
    init_tracing();
    let mut qb = table("users; DROP TABLE accounts; --");
    qb.ident_policy(IdentPolicy::Allowlist);
    assert_eq!(qb.build().sql(), r#"select * from "usersTABLEaccounts""#);
}
