// tests/render_tests.rs

use survey_view::config::Config;
use survey_view::models::field::FieldRecord;
use survey_view::models::options::{CodeOptions, LabelOptions, Separator};
use survey_view::render::link::{ImageLinkOptions, RouteTable, image_link};
use survey_view::render::text::{field_code, field_label};

fn base_field() -> FieldRecord {
    FieldRecord {
        fieldname: Some("12345X7X42".to_string()),
        ..FieldRecord::default()
    }
}

#[test]
fn label_is_empty_without_fieldname() {
    let field = FieldRecord::default();
    assert_eq!(field_label(&field, &LabelOptions::default()), "");
}

#[test]
fn label_question_only_keeps_trailing_space() {
    let field = FieldRecord {
        question: Some("Q".to_string()),
        ..base_field()
    };
    assert_eq!(field_label(&field, &LabelOptions::default()), "Q ");
}

#[test]
fn label_appends_all_parts_in_fixed_order() {
    // Arrange
    let field = FieldRecord {
        question: Some("Q".to_string()),
        subquestion: Some("S".to_string()),
        subquestion1: Some("S1".to_string()),
        subquestion2: Some("S2".to_string()),
        scale: Some("SC".to_string()),
        aid: Some("1".to_string()),
        ..base_field()
    };

    // Act
    let label = field_label(&field, &LabelOptions::default());

    // Assert
    assert_eq!(label, "Q (S)(S1)(S2)(SC)");
}

#[test]
fn label_scale_is_independent_of_subquestion_gate() {
    // No aid: subquestions are skipped, the scale still shows.
    let field = FieldRecord {
        question: Some("Q".to_string()),
        subquestion: Some("S".to_string()),
        scale: Some("SC".to_string()),
        ..base_field()
    };
    assert_eq!(field_label(&field, &LabelOptions::default()), "Q (SC)");
}

#[test]
fn label_flattens_markup_by_default() {
    let field = FieldRecord {
        question: Some("<p>Please   rate</p>".to_string()),
        ..base_field()
    };
    assert_eq!(field_label(&field, &LabelOptions::default()), "Please rate ");
}

#[test]
fn label_passes_markup_through_when_flatten_is_off() {
    let field = FieldRecord {
        question: Some("<b>Q</b>".to_string()),
        ..base_field()
    };
    let opts = LabelOptions {
        flatten: false,
        ..LabelOptions::default()
    };
    assert_eq!(field_label(&field, &opts), "<b>Q</b> ");
}

#[test]
fn label_abbreviates_each_part() {
    let field = FieldRecord {
        question: Some("abcdefghij".to_string()),
        ..base_field()
    };
    let opts = LabelOptions {
        abbreviate: Some(5),
        ..LabelOptions::default()
    };
    assert_eq!(field_label(&field, &opts), "ab... ");
}

#[test]
fn label_honors_custom_separator() {
    let field = FieldRecord {
        question: Some("Q".to_string()),
        subquestion: Some("S".to_string()),
        aid: Some("1".to_string()),
        ..base_field()
    };
    let opts = LabelOptions {
        separator: Separator::Prefix("_".to_string()),
        ..LabelOptions::default()
    };
    assert_eq!(field_label(&field, &opts), "Q _S");
}

#[test]
fn code_is_empty_without_fieldname() {
    assert_eq!(field_code(&FieldRecord::default(), &CodeOptions::default()), "");
}

#[test]
fn code_falls_back_to_fieldname_without_title() {
    assert_eq!(
        field_code(&base_field(), &CodeOptions::default()),
        "12345X7X42"
    );
}

#[test]
fn code_combines_title_aid_and_scale_number() {
    // Arrange
    let field = FieldRecord {
        title: Some("T".to_string()),
        aid: Some("1".to_string()),
        scale: Some("y".to_string()),
        scale_id: Some("0".to_string()),
        ..base_field()
    };

    // Act: non-legacy codes use the one-based scale number.
    let code = field_code(&field, &CodeOptions::default());

    // Assert
    assert_eq!(code, "T[1][1]");
}

#[test]
fn code_legacy_compat_uses_underscores_and_raw_scale_id() {
    let field = FieldRecord {
        title: Some("T".to_string()),
        aid: Some("1".to_string()),
        scale: Some("y".to_string()),
        scale_id: Some("0".to_string()),
        ..base_field()
    };
    let opts = CodeOptions {
        legacy_compat: true,
        // Legacy mode wins over whatever separator the caller asked for.
        separator: Separator::Wrap("[".to_string(), "]".to_string()),
    };
    assert_eq!(field_code(&field, &opts), "T_1_0");
}

#[test]
fn code_skips_empty_aid_and_falsy_scale() {
    let field = FieldRecord {
        title: Some("T".to_string()),
        aid: Some("".to_string()),
        scale: Some("0".to_string()),
        scale_id: Some("4".to_string()),
        ..base_field()
    };
    assert_eq!(field_code(&field, &CodeOptions::default()), "T");
}

#[test]
fn image_link_resolves_route_through_the_table() {
    // Arrange
    let config = Config {
        image_base_url: "/assets/images/".to_string(),
        rust_log: "error".to_string(),
        log_dir: "logs".to_string(),
    };
    let resolver = RouteTable::new("https://example.com/admin/").expect("valid base url");

    // Act
    let html = image_link(
        &resolver,
        &config.image_base_url,
        "edit.png",
        Some("survey/view"),
        "Edit survey",
        &ImageLinkOptions::default(),
    );

    // Assert
    assert_eq!(
        html,
        "<a href=\"https://example.com/admin/survey/view\" class=\"imagelink\">\
         <img src=\"/assets/images/edit.png\" alt=\"Edit survey\" title=\"Edit survey\"></a>"
    );
}

#[test]
fn image_link_none_and_hash_targets_are_noop_links() {
    let resolver = RouteTable::new("https://example.com/").expect("valid base url");

    for link_url in [None, Some("#")] {
        let html = image_link(
            &resolver,
            "/img/",
            "x.png",
            link_url,
            "Alt",
            &ImageLinkOptions::default(),
        );
        assert!(html.starts_with("<a href=\"#\""));
        assert!(html.contains("alt=\"Alt\" title=\"Alt\""));
    }
}

#[test]
fn image_link_omits_empty_class_and_emits_target() {
    let resolver = RouteTable::new("https://example.com/").expect("valid base url");
    let opts = ImageLinkOptions {
        target: Some("_blank".to_string()),
        class: String::new(),
        attributes: Vec::new(),
    };

    let html = image_link(&resolver, "/img/", "x.png", None, "Alt", &opts);

    assert!(html.starts_with("<a href=\"#\" target=\"_blank\">"));
    assert!(!html.contains("class="));
}

#[test]
fn image_link_escapes_quotes_in_extra_attributes() {
    let resolver = RouteTable::new("https://example.com/").expect("valid base url");
    let opts = ImageLinkOptions {
        attributes: vec![(
            "data-confirm".to_string(),
            "Say \"yes\" to continue".to_string(),
        )],
        ..ImageLinkOptions::default()
    };

    let html = image_link(&resolver, "/img/", "x.png", None, "Alt", &opts);

    assert!(html.contains("data-confirm=\"Say &quot;yes&quot; to continue\""));
}

#[test]
fn field_record_deserializes_with_missing_keys() {
    // Records from the field map carry arbitrary subsets of keys.
    let field: FieldRecord = serde_json::from_str(r#"{"fieldname": "f", "title": "T"}"#)
        .expect("record should deserialize");

    assert_eq!(field.fieldname.as_deref(), Some("f"));
    assert_eq!(field.title.as_deref(), Some("T"));
    assert!(field.question.is_none());
    assert!(!field.has_subquestion());
    assert_eq!(field.scale_number(), 0);
}
