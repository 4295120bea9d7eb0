#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use axum::http::{Method, StatusCode};
    use serde_json::{Value, json};

    use crate::tests::{question, seed_categories, seeded_state, send, state_with};

    #[tokio::test]
    async fn serves_question_from_requested_category() {
        let (status, body) = send(
            seeded_state(),
            Method::POST,
            "/quizzes",
            Some(json!({"previous_questions": [], "quiz_category": 4})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"]["category"], 4);
        assert!(body.get("message").is_none());
    }

    #[tokio::test]
    async fn walks_a_category_without_repeats_until_exhausted() {
        let state = seeded_state();
        let mut served: Vec<i64> = Vec::new();

        // Category 1 holds questions 1, 7, 13, 19 and 25.
        for _ in 0..5 {
            let (status, body) = send(
                state.clone(),
                Method::POST,
                "/quizzes",
                Some(json!({"previous_questions": served, "quiz_category": "1"})),
            )
            .await;

            assert_eq!(status, StatusCode::OK);
            let id = body["question"]["id"].as_i64().unwrap();
            assert!(!served.contains(&id));
            served.push(id);
        }

        let served_set: HashSet<i64> = served.iter().copied().collect();
        assert_eq!(served_set, HashSet::from([1, 7, 13, 19, 25]));

        let (status, body) = send(
            state,
            Method::POST,
            "/quizzes",
            Some(json!({"previous_questions": served, "quiz_category": 1})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"], Value::Null);
        assert_eq!(body["message"], "No more questions");
    }

    #[tokio::test]
    async fn zero_or_null_category_selects_from_all_questions() {
        let questions = vec![question(1, "Science?", 1), question(2, "Art?", 2)];

        for filter in [json!(0), json!("0"), Value::Null] {
            let state = state_with(seed_categories(), questions.clone());
            let (status, body) = send(
                state,
                Method::POST,
                "/quizzes",
                Some(json!({"previous_questions": [1], "quiz_category": filter})),
            )
            .await;

            assert_eq!(status, StatusCode::OK, "{}", filter);
            assert_eq!(body["question"]["id"], 2, "{}", filter);
        }
    }

    #[tokio::test]
    async fn missing_fields_default_to_unrestricted_quiz() {
        let state = state_with(seed_categories(), vec![question(3, "Only?", 5)]);
        let (status, body) = send(state, Method::POST, "/quizzes", Some(json!({}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"]["id"], 3);
    }

    #[tokio::test]
    async fn unknown_category_has_no_questions() {
        let (status, body) = send(
            seeded_state(),
            Method::POST,
            "/quizzes",
            Some(json!({"previous_questions": [], "quiz_category": 77})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"], Value::Null);
    }

    #[tokio::test]
    async fn non_numeric_category_is_bad_request() {
        let (status, body) = send(
            seeded_state(),
            Method::POST,
            "/quizzes",
            Some(json!({"previous_questions": [], "quiz_category": "science"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], 400);
    }

    #[tokio::test]
    async fn malformed_history_is_bad_request() {
        let (status, _) = send(
            seeded_state(),
            Method::POST,
            "/quizzes",
            Some(json!({"previous_questions": "1,2,3"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn storage_fault_is_bad_request() {
        let state = seeded_state();
        state.get_store().set_failing(true);

        let (status, _) = send(
            state,
            Method::POST,
            "/quizzes",
            Some(json!({"previous_questions": []})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_is_not_allowed() {
        let (status, _) = send(seeded_state(), Method::GET, "/quizzes", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
