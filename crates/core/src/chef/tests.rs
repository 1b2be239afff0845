use std::time::Duration;

use recipe_chat_model::{ErrorKind, Role, Turn};
use recipe_chat_test_model::{
    PresetFailure, PresetResponse, TestModelProvider,
};

use crate::{Chef, ChefBuilder, Config, INSTRUCTION_TEXT};

fn chef_replying(contents: &[&str]) -> (Chef, TestModelProvider) {
    let mut model_provider = TestModelProvider::default();
    for content in contents {
        model_provider
            .add_response_step(PresetResponse::with_content(*content));
    }
    let chef = ChefBuilder::with_model_provider(model_provider.clone())
        .with_model("test-model")
        .build();
    (chef, model_provider)
}

#[tokio::test]
async fn test_empty_transcript() {
    let (chef, model_provider) = chef_replying(&["  Hello! "]);

    let transcript = chef.advance(&[]).await.unwrap();
    assert_eq!(
        transcript,
        vec![Turn::system(INSTRUCTION_TEXT), Turn::assistant("Hello!")]
    );

    let received = model_provider.received_requests();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].model, "test-model");
    assert_eq!(received[0].messages, vec![Turn::system(INSTRUCTION_TEXT)]);
}

#[tokio::test]
async fn test_existing_system_turn_is_kept() {
    let (chef, model_provider) = chef_replying(&["Hey there"]);

    let input = vec![Turn::system("X"), Turn::user("Hi")];
    let transcript = chef.advance(&input).await.unwrap();
    assert_eq!(
        transcript,
        vec![
            Turn::system("X"),
            Turn::user("Hi"),
            Turn::assistant("Hey there"),
        ]
    );
    assert_eq!(model_provider.received_requests()[0].messages, input);
}

#[tokio::test]
async fn test_instruction_is_prepended() {
    let (chef, model_provider) = chef_replying(&["\n## Pancakes\n\n"]);

    let input = vec![
        Turn::user("Breakfast ideas?"),
        Turn::assistant("Sweet or savory?"),
        Turn::user("Sweet"),
    ];
    let transcript = chef.advance(&input).await.unwrap();

    assert_eq!(transcript.len(), input.len() + 2);
    assert_eq!(transcript[0], Turn::system(INSTRUCTION_TEXT));
    assert_eq!(&transcript[1..4], input.as_slice());
    assert_eq!(transcript[4], Turn::assistant("## Pancakes"));

    let sent = &model_provider.received_requests()[0].messages;
    assert_eq!(sent.as_slice(), &transcript[..4]);
}

#[tokio::test]
async fn test_conversation_keeps_growing() {
    let (chef, model_provider) =
        chef_replying(&["What do you have?", "## Egg Fried Rice"]);

    let mut transcript = vec![Turn::user("I'm hungry")];
    transcript = chef.advance(&transcript).await.unwrap();
    assert_eq!(transcript.len(), 3);

    transcript.push(Turn::user("Rice and eggs"));
    transcript = chef.advance(&transcript).await.unwrap();

    // The second call already starts with the instruction, so no second
    // system turn shows up.
    assert_eq!(transcript.len(), 5);
    let system_turns = transcript
        .iter()
        .filter(|turn| turn.role() == Role::System)
        .count();
    assert_eq!(system_turns, 1);
    assert_eq!(transcript[4], Turn::assistant("## Egg Fried Rice"));
    assert_eq!(model_provider.received_requests()[1].messages.len(), 4);
}

#[tokio::test]
async fn test_length_law() {
    let inputs = [
        vec![],
        vec![Turn::user("a")],
        vec![Turn::system("s")],
        vec![Turn::system("s"), Turn::user("a"), Turn::assistant("b")],
        vec![Turn::assistant("b"), Turn::system("s")],
    ];
    for input in inputs {
        let (chef, _) = chef_replying(&[" ok "]);
        let prepended = usize::from(
            input.first().is_none_or(|turn| turn.role() != Role::System),
        );
        let transcript = chef.advance(&input).await.unwrap();
        assert_eq!(transcript.len(), input.len() + 1 + prepended);

        let last = transcript.last().unwrap();
        assert_eq!(last.role(), Role::Assistant);
        assert_eq!(last.content(), "ok");
    }
}

#[tokio::test]
async fn test_provider_error_is_propagated() {
    let mut model_provider = TestModelProvider::default();
    model_provider.add_response_step(PresetResponse::always_failing(
        PresetFailure::Network,
    ));
    let chef = ChefBuilder::with_model_provider(model_provider.clone()).build();

    let input = vec![Turn::user("Hi")];
    let err = chef.advance(&input).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(matches!(err, crate::Error::Provider(_)));
    // Exactly one attempt, no retry.
    assert_eq!(model_provider.received_requests().len(), 1);
    assert_eq!(input, vec![Turn::user("Hi")]);
}

#[tokio::test]
async fn test_malformed_reply() {
    let mut model_provider = TestModelProvider::default();
    model_provider.add_response_step(PresetResponse::always_failing(
        PresetFailure::MalformedResponse,
    ));
    let chef = ChefBuilder::with_model_provider(model_provider).build();
    let err = chef.advance(&[]).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);

    let mut model_provider = TestModelProvider::default();
    model_provider.add_response_step(
        PresetResponse::with_content("hi").with_role(Role::User),
    );
    let chef = ChefBuilder::with_model_provider(model_provider).build();
    let err = chef.advance(&[]).await.unwrap_err();
    assert!(matches!(err, crate::Error::UnexpectedRole(Role::User)));
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn test_builder_defaults() {
    let chef = ChefBuilder::with_model_provider(TestModelProvider::default())
        .with_instruction("  ")
        .build();
    assert_eq!(chef.model(), Config::DEFAULT_MODEL);
    assert_eq!(chef.instruction(), INSTRUCTION_TEXT);

    let config = Config::with_model("gpt-4.1");
    let chef =
        ChefBuilder::from_config(&config, TestModelProvider::default())
            .with_instruction("Be terse.")
            .build();
    assert_eq!(chef.model(), "gpt-4.1");
    assert_eq!(chef.instruction(), "Be terse.");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_conversations() {
    let mut model_provider = TestModelProvider::default();
    model_provider.set_delay(Duration::from_millis(10));
    for _ in 0..4 {
        model_provider.add_response_step(PresetResponse::with_content("Sure"));
    }
    let chef = ChefBuilder::with_model_provider(model_provider.clone()).build();

    let base = vec![Turn::user("Dinner?")];
    let tasks: Vec<_> = (0..4)
        .map(|_| {
            let chef = chef.clone();
            let base = base.clone();
            tokio::spawn(async move { chef.advance(&base).await })
        })
        .collect();

    for task in tasks {
        let transcript = task.await.unwrap().unwrap();
        assert_eq!(
            transcript,
            vec![
                Turn::system(INSTRUCTION_TEXT),
                Turn::user("Dinner?"),
                Turn::assistant("Sure"),
            ]
        );
    }
    assert_eq!(model_provider.received_requests().len(), 4);
}
