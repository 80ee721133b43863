use crate::commands::{CmdMessage, CmdResult, Outcome};
use crate::error::Result;
use crate::model::{NewProduct, Product};
use crate::store::CatalogStore;

use super::helpers::{code_taken, next_id};

pub fn run<S: CatalogStore>(store: &mut S, fields: NewProduct) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let missing = fields.missing_fields();
    if !missing.is_empty() {
        result.add_message(CmdMessage::error(format!(
            "All fields are required; missing: {}",
            missing.join(", ")
        )));
        result.outcome = Outcome::MissingFields(missing);
        return Ok(result);
    }

    let mut products = store.load()?;

    if code_taken(&products, &fields.code, None) {
        result.outcome = Outcome::DuplicateCode(fields.code.clone());
        result.add_message(CmdMessage::error(format!(
            "Code already exists: {}",
            fields.code
        )));
        return Ok(result);
    }

    let product = Product::from_fields(next_id(&products), fields);
    products.push(product.clone());
    store.save(&products)?;

    result.add_message(CmdMessage::success(format!(
        "Product added ({}): {}",
        product.id, product.title
    )));
    result.affected.push(product);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::store::memory::InMemoryStore;

    fn fields(code: &str) -> NewProduct {
        NewProduct {
            title: "Widget".into(),
            description: "A widget".into(),
            price: 9.99,
            thumbnail: "widget.png".into(),
            code: code.into(),
            stock: 3,
        }
    }

    #[test]
    fn appends_with_fresh_id() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, fields("w-1")).unwrap();
        assert!(result.outcome.is_success());
        assert_eq!(result.affected[0].id, 1);

        let listed = list::run(&store).unwrap().listed;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].code, "w-1");
        assert_eq!(listed[0].title, "Widget");
    }

    #[test]
    fn ids_strictly_increase_in_assignment_order() {
        let mut store = InMemoryStore::new();
        for i in 1..=5u64 {
            let result = run(&mut store, fields(&format!("w-{}", i))).unwrap();
            assert_eq!(result.affected[0].id, i);
        }
    }

    #[test]
    fn id_not_reused_after_deleting_the_highest() {
        let mut store = InMemoryStore::new();
        run(&mut store, fields("w-1")).unwrap();
        run(&mut store, fields("w-2")).unwrap();
        crate::commands::delete::run(&mut store, 2).unwrap();

        let result = run(&mut store, fields("w-3")).unwrap();
        assert_eq!(result.affected[0].id, 3);
    }

    #[test]
    fn rejects_missing_fields_without_writing() {
        let mut store = InMemoryStore::new();
        let mut empty_title = fields("w-1");
        empty_title.title = String::new();

        let result = run(&mut store, empty_title).unwrap();
        assert_eq!(result.outcome, Outcome::MissingFields(vec!["title"]));
        assert!(list::run(&store).unwrap().listed.is_empty());
    }

    #[test]
    fn zero_price_and_stock_count_as_missing() {
        let mut store = InMemoryStore::new();
        let mut zeroed = fields("w-1");
        zeroed.price = 0.0;
        zeroed.stock = 0;

        let result = run(&mut store, zeroed).unwrap();
        assert_eq!(result.outcome, Outcome::MissingFields(vec!["price", "stock"]));
        assert!(list::run(&store).unwrap().listed.is_empty());
    }

    #[test]
    fn rejects_duplicate_code_without_writing() {
        let mut store = InMemoryStore::new();
        run(&mut store, fields("w-1")).unwrap();

        let mut other = fields("w-1");
        other.title = "Other".into();
        let result = run(&mut store, other).unwrap();

        assert_eq!(result.outcome, Outcome::DuplicateCode("w-1".into()));
        assert_eq!(list::run(&store).unwrap().listed.len(), 1);
    }
}
