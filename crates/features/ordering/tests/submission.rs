use barista_ordering::validation::{
    FLAVOR_REQUIRED, SIZE_REQUIRED, STRENGTH_REQUIRED, TYPE_REQUIRED,
};
use barista_ordering::{
    CoffeeCatalog, CoffeeOrder, CoffeeType, FormField, OrderDraft, OrderFormModel, OrderHandler,
    OrderingError, SubmitOutcome, ValidationEngine, ValidationPolicy,
};
use std::convert::Infallible;

/// Records every order it receives.
#[derive(Debug, Default)]
struct Recorder {
    orders: Vec<CoffeeOrder>,
}

impl OrderHandler for Recorder {
    type Error = Infallible;

    fn handle(&mut self, order: CoffeeOrder) -> Result<(), Infallible> {
        self.orders.push(order);
        Ok(())
    }
}

fn fill(form: &mut OrderFormModel, values: [(&str, &str); 4]) {
    for (name, raw) in values {
        form.set_field_by_name(name, raw).expect("known field and value");
    }
}

#[test]
fn valid_latte_is_submitted_once_and_form_resets() {
    let mut form = OrderFormModel::default();
    fill(&mut form, [("type", "latte"), ("flavor", "caramel"), ("size", "grand"), ("strength", "70")]);
    assert!(barista_ordering::validate(form.draft()).is_empty());

    let mut recorder = Recorder::default();
    let outcome = form.submit(&mut recorder).expect("infallible handler");

    assert_eq!(outcome, SubmitOutcome::Submitted);
    assert_eq!(
        recorder.orders,
        [CoffeeOrder {
            coffee_type: CoffeeType::Latte,
            flavor: "caramel".to_owned(),
            size: "grand".to_owned(),
            strength: 70,
        }]
    );
    assert_eq!(form.draft(), &OrderDraft::new());
    assert!(form.errors().is_empty());
    assert_eq!(form.submit_count(), 0);
}

#[test]
fn blank_form_reports_four_errors_and_skips_handler() {
    let mut form = OrderFormModel::default();
    fill(&mut form, [("type", ""), ("flavor", ""), ("size", ""), ("strength", "")]);

    let mut recorder = Recorder::default();
    let outcome = form.submit(&mut recorder).expect("infallible handler");

    let SubmitOutcome::Rejected(errors) = outcome else {
        panic!("blank form must be rejected");
    };
    assert_eq!(errors.len(), 4);
    assert_eq!(errors.get(FormField::Type), Some(TYPE_REQUIRED));
    assert_eq!(errors.get(FormField::Flavor), Some(FLAVOR_REQUIRED));
    assert_eq!(errors.get(FormField::Size), Some(SIZE_REQUIRED));
    assert_eq!(errors.get(FormField::Strength), Some(STRENGTH_REQUIRED));
    assert_eq!(form.errors(), &errors);
    assert!(recorder.orders.is_empty());
    assert_eq!(form.submit_count(), 1);
}

#[test]
fn each_missing_field_blocks_submission() {
    let complete = [("type", "espresso"), ("flavor", "vanilla"), ("size", "short"), ("strength", "40")];
    let expectations = [
        (FormField::Type, TYPE_REQUIRED),
        (FormField::Flavor, FLAVOR_REQUIRED),
        (FormField::Size, SIZE_REQUIRED),
        (FormField::Strength, STRENGTH_REQUIRED),
    ];

    for (index, (field, message)) in expectations.into_iter().enumerate() {
        let mut values = complete;
        values[index].1 = "";

        let mut form = OrderFormModel::default();
        fill(&mut form, values);
        let mut recorder = Recorder::default();
        let outcome = form.submit(&mut recorder).expect("infallible handler");

        assert!(!outcome.is_submitted(), "{field} missing must reject");
        assert_eq!(form.error(field), Some(message));
        assert!(recorder.orders.is_empty());
    }
}

#[test]
fn handler_error_propagates_and_keeps_draft() {
    let mut form = OrderFormModel::default();
    fill(&mut form, [("type", "americano"), ("flavor", "maple"), ("size", "venti"), ("strength", "90")]);
    let before = form.draft().clone();

    let mut calls = 0;
    let result = form.submit(&mut |_: CoffeeOrder| -> Result<(), &'static str> {
        calls += 1;
        Err("printer jammed")
    });

    assert_eq!(result, Err("printer jammed"));
    assert_eq!(calls, 1);
    assert_eq!(form.draft(), &before);
    assert!(form.errors().is_empty());
}

#[test]
fn fixing_errors_after_rejection_allows_submission() {
    let mut form = OrderFormModel::default();
    fill(&mut form, [("type", "cappuccino"), ("flavor", "cinnamon"), ("size", "tall"), ("strength", "150")]);

    let mut recorder = Recorder::default();
    assert!(!form.submit(&mut recorder).expect("infallible handler").is_submitted());
    assert_eq!(form.error(FormField::Strength), Some("Strength cannot exceed 100"));

    form.set_field(FormField::Strength, "100").expect("numeric input");
    assert_eq!(form.error(FormField::Strength), None);

    assert!(form.submit(&mut recorder).expect("infallible handler").is_submitted());
    assert_eq!(recorder.orders.len(), 1);
    assert_eq!(recorder.orders[0].strength, 100);
}

#[test]
fn off_catalog_choices_never_reach_the_handler() {
    let mut form = OrderFormModel::default();
    fill(&mut form, [("type", "espresso"), ("flavor", "vanilla"), ("size", "short"), ("strength", "60")]);

    let err = form.set_field_by_name("flavor", "caramel").expect_err("not on espresso menu");
    assert!(matches!(err, OrderingError::NotOffered { field: FormField::Flavor, .. }));
    let err = form.set_field_by_name("size", "venti").expect_err("not on espresso menu");
    assert_eq!(err.to_string(), "size 'venti' is not offered for espresso");

    let mut recorder = Recorder::default();
    assert!(form.submit(&mut recorder).expect("infallible handler").is_submitted());
    assert_eq!(recorder.orders[0].flavor, "vanilla");
    assert_eq!(recorder.orders[0].size, "short");
}

#[test]
fn strict_engine_rejects_drafts_built_outside_the_form() {
    let draft = OrderDraft {
        coffee_type: Some(CoffeeType::Espresso),
        flavor: "caramel".to_owned(),
        size: "short".to_owned(),
        strength: Some(60),
    };
    let strict = ValidationEngine::new(CoffeeCatalog::default(), ValidationPolicy { strict_catalog: true });

    let errors = strict.check(&draft).expect_err("caramel is not an espresso flavor");
    assert_eq!(errors.fields().collect::<Vec<_>>(), [FormField::Flavor]);
    assert_eq!(errors.get(FormField::Flavor), Some("Please choose a flavor available for espresso"));

    let order = ValidationEngine::default().check(&draft).expect("presence rules only");
    assert_eq!(order.flavor, "caramel");
}
