//! Association behavior against a freshly reset, seeded in-memory database.

use social_core::domain::{NewComment, NewLike, NewPost, NewProfile, NewUser};
use social_core::EntityKind;
use social_core::error::RepoError;
use social_core::ports::{
    BaseRepository, CommentRepository, LikeRepository, PostRepository, ProfileRepository,
    UserRepository,
};
use social_infra::{DatabaseConfig, Repositories, SeedData, SocialDatabase, SyncMode, seed};

async fn empty_db() -> (SocialDatabase, Repositories) {
    let db = SocialDatabase::open(&DatabaseConfig::in_memory())
        .await
        .unwrap();
    db.sync(SyncMode::Force).await.unwrap();
    let repos = db.repositories();
    (db, repos)
}

async fn seeded_db() -> (SocialDatabase, Repositories) {
    let (db, repos) = empty_db().await;
    seed(&repos, &SeedData::bundled().unwrap()).await.unwrap();
    (db, repos)
}

#[tokio::test]
async fn test_seed_round_trip() {
    let (db, repos) = seeded_db().await;
    let data = SeedData::bundled().unwrap();

    let users = repos.users.find_all().await.unwrap();
    assert_eq!(users.len(), data.users.len());
    for (stored, seeded) in users.iter().zip(&data.users) {
        assert_eq!(stored.username, seeded.username);
        assert_eq!(stored.email, seeded.email);
    }

    let profiles = repos.profiles.find_all().await.unwrap();
    assert_eq!(profiles.len(), data.profiles.len());
    for (stored, seeded) in profiles.iter().zip(&data.profiles) {
        assert_eq!(stored.bio, seeded.bio);
        assert_eq!(stored.profile_picture, seeded.profile_picture);
        assert_eq!(stored.birthday, seeded.birthday);
        assert_eq!(stored.user_id, None);
    }

    let posts = repos.posts.find_all().await.unwrap();
    assert_eq!(posts.len(), data.posts.len());
    for (stored, seeded) in posts.iter().zip(&data.posts) {
        assert_eq!(stored.title, seeded.title);
        assert_eq!(stored.body, seeded.body);
        assert_eq!(stored.created_at, seeded.created_at);
    }

    let comments = repos.comments.find_all().await.unwrap();
    assert_eq!(comments.len(), data.comments.len());
    for (stored, seeded) in comments.iter().zip(&data.comments) {
        assert_eq!(stored.body, seeded.body);
        assert_eq!(stored.created_at, seeded.created_at);
    }

    let likes = repos.likes.find_all().await.unwrap();
    assert_eq!(likes.len(), data.likes.len());
    for (stored, seeded) in likes.iter().zip(&data.likes) {
        assert_eq!(stored.reaction_type, seeded.reaction_type);
        assert_eq!(stored.created_at, seeded.created_at);
    }

    db.close().await.unwrap();
}

#[tokio::test]
async fn test_seed_report_counts_rows() {
    let (_db, repos) = empty_db().await;
    let data = SeedData::bundled().unwrap();

    let report = seed(&repos, &data).await.unwrap();

    assert_eq!(report.users, data.users.len() as u64);
    assert_eq!(report.likes, data.likes.len() as u64);
    assert_eq!(
        report.total(),
        (data.users.len()
            + data.profiles.len()
            + data.posts.len()
            + data.comments.len()
            + data.likes.len()) as u64
    );
}

#[tokio::test]
async fn test_user_has_one_profile_and_profile_belongs_to_user() {
    let (_db, repos) = seeded_db().await;

    repos.users.set_profile(1, 1).await.unwrap();
    repos.profiles.set_user(1, 1).await.unwrap();

    let profile = repos.users.get_profile(1).await.unwrap().unwrap();
    assert_eq!(profile.bio, "I'm a software engineer");
    assert_eq!(
        profile.profile_picture.as_deref(),
        Some("https://example.com/profile1.jpg")
    );
    assert_eq!(profile.birthday.as_deref(), Some("1990-06-15"));

    let user = repos.profiles.get_user(1).await.unwrap().unwrap();
    assert_eq!(user.username, "john_doe");
    assert_eq!(user.email, "john_doe@example.com");
}

#[tokio::test]
async fn test_set_profile_is_idempotent() {
    let (_db, repos) = seeded_db().await;

    repos.users.set_profile(1, 1).await.unwrap();
    repos.users.set_profile(1, 1).await.unwrap();

    let linked: Vec<_> = repos
        .profiles
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .filter(|p| p.user_id == Some(1))
        .collect();
    assert_eq!(linked.len(), 1);
    assert_eq!(repos.users.get_profile(1).await.unwrap().unwrap().id, 1);
}

#[tokio::test]
async fn test_set_profile_detaches_previous() {
    let (_db, repos) = seeded_db().await;

    repos.users.set_profile(1, 1).await.unwrap();
    repos.profiles.set_user(2, 1).await.unwrap();

    assert_eq!(repos.users.get_profile(1).await.unwrap().unwrap().id, 2);
    assert!(repos.profiles.get_user(1).await.unwrap().is_none());
    assert_eq!(repos.profiles.find_by_id(1).await.unwrap().unwrap().user_id, None);
}

#[tokio::test]
async fn test_create_profile_links_new_record() {
    let (_db, repos) = seeded_db().await;
    repos.users.set_profile(2, 2).await.unwrap();

    let created = repos
        .users
        .create_profile(2, NewProfile::new("Trail runner").with_birthday("1992-04-01"))
        .await
        .unwrap();

    assert_eq!(created.user_id, Some(2));
    assert_eq!(repos.users.get_profile(2).await.unwrap().unwrap(), created);
    assert_eq!(repos.profiles.find_by_id(2).await.unwrap().unwrap().user_id, None);
}

#[tokio::test]
async fn test_user_has_many_posts() {
    let (_db, repos) = seeded_db().await;

    repos.posts.set_user(1, 1).await.unwrap();
    repos.posts.set_user(2, 1).await.unwrap();

    let posts = repos.users.get_posts(1).await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].title, "Hiking in Yosemite");
    assert_eq!(
        posts[0].body,
        "I had an amazing time hiking in Yosemite National Park!"
    );
    assert_eq!(posts[0].created_at.as_deref(), Some("2022-03-15T10:30:00.000Z"));
    assert_eq!(posts[1].title, "London Street Photography");
    assert_eq!(posts[1].created_at.as_deref(), Some("2022-03-18T14:15:00.000Z"));

    let author = repos.posts.get_user(2).await.unwrap().unwrap();
    assert_eq!(author.username, "john_doe");
    assert_eq!(repos.posts.find_by_user_id(1).await.unwrap(), posts);
}

#[tokio::test]
async fn test_user_without_posts_gets_empty_list() {
    let (_db, repos) = seeded_db().await;
    repos.users.add_post(1, 1).await.unwrap();

    assert!(repos.users.get_posts(2).await.unwrap().is_empty());
    assert!(repos.posts.get_user(3).await.unwrap().is_none());
}

#[tokio::test]
async fn test_set_user_twice_keeps_single_link() {
    let (_db, repos) = seeded_db().await;

    repos.posts.set_user(1, 2).await.unwrap();
    repos.posts.set_user(1, 2).await.unwrap();

    let posts = repos.users.get_posts(2).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, 1);
}

#[tokio::test]
async fn test_moving_a_post_changes_owner() {
    let (_db, repos) = seeded_db().await;

    repos.users.add_post(1, 3).await.unwrap();
    repos.users.add_post(2, 3).await.unwrap();

    assert!(repos.users.get_posts(1).await.unwrap().is_empty());
    assert_eq!(repos.users.get_posts(2).await.unwrap()[0].id, 3);
}

#[tokio::test]
async fn test_remove_post_only_unlinks_own_posts() {
    let (_db, repos) = seeded_db().await;
    repos.users.add_post(1, 1).await.unwrap();
    repos.users.add_post(2, 2).await.unwrap();

    repos.users.remove_post(1, 2).await.unwrap();
    assert_eq!(repos.posts.find_by_id(2).await.unwrap().unwrap().user_id, Some(2));

    repos.users.remove_post(1, 1).await.unwrap();
    assert!(repos.users.get_posts(1).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_post_has_many_comments() {
    let (_db, repos) = seeded_db().await;

    repos.posts.add_comment(1, 1).await.unwrap();
    repos.posts.add_comment(1, 2).await.unwrap();

    let comments = repos.posts.get_comments(1).await.unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].body, "This is a great post!");
    assert_eq!(comments[0].created_at.as_deref(), Some("2022-01-01T12:00:00Z"));
    assert_eq!(comments[1].body, "I completely agree with you.");
    assert_eq!(comments[1].created_at.as_deref(), Some("2022-01-02T08:30:00Z"));

    let post = repos.comments.get_post(2).await.unwrap().unwrap();
    assert_eq!(post.title, "Hiking in Yosemite");
}

#[tokio::test]
async fn test_single_post_single_comment() {
    let (_db, repos) = empty_db().await;

    let post = repos
        .posts
        .create(NewPost::new(
            "Hiking in Yosemite",
            "I had an amazing time hiking in Yosemite National Park!",
        ))
        .await
        .unwrap();
    let comment = repos
        .comments
        .create(NewComment::new("This is a great post!"))
        .await
        .unwrap();

    repos.comments.set_post(comment.id, post.id).await.unwrap();

    let comments = repos.posts.get_comments(post.id).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].id, comment.id);
    assert_eq!(comments[0].body, "This is a great post!");

    let parent = repos.comments.get_post(comment.id).await.unwrap().unwrap();
    assert_eq!(parent.id, post.id);
    assert_eq!(parent.title, "Hiking in Yosemite");
}

#[tokio::test]
async fn test_create_and_remove_comment_through_post() {
    let (_db, repos) = seeded_db().await;

    let created = repos
        .posts
        .create_comment(2, NewComment::new("Lovely light in these.").at("2022-03-19T09:00:00Z"))
        .await
        .unwrap();
    assert_eq!(created.post_id, Some(2));
    assert_eq!(repos.posts.get_comments(2).await.unwrap(), vec![created.clone()]);

    repos.posts.remove_comment(2, created.id).await.unwrap();
    assert!(repos.posts.get_comments(2).await.unwrap().is_empty());
    assert!(repos.comments.get_post(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_users_and_likes_many_to_many() {
    let (_db, repos) = seeded_db().await;

    repos.users.add_like(1, 1).await.unwrap();
    repos.users.add_like(1, 2).await.unwrap();
    repos.likes.add_user(1, 2).await.unwrap();
    repos.likes.add_user(2, 2).await.unwrap();

    let user_likes = repos.users.get_likes(1).await.unwrap();
    let reactions: Vec<_> = user_likes.iter().map(|l| l.reaction_type.as_str()).collect();
    assert_eq!(reactions, vec!["👍", "❤️"]);

    let like_users = repos.likes.get_users(1).await.unwrap();
    assert_eq!(like_users.len(), 2);
    assert_eq!(like_users[0].username, "john_doe");
    assert_eq!(like_users[0].email, "john_doe@example.com");
    assert_eq!(like_users[1].username, "jane_doe");
    assert_eq!(like_users[1].email, "jane_doe@example.com");

    assert_eq!(repos.users.get_likes(2).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_many_to_many_is_symmetric() {
    let (_db, repos) = seeded_db().await;

    repos.users.add_like(3, 3).await.unwrap();
    repos.likes.add_user(1, 3).await.unwrap();

    let holders: Vec<_> = repos
        .likes
        .get_users(3)
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(holders, vec![3]);

    let held: Vec<_> = repos
        .users
        .get_likes(3)
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.id)
        .collect();
    assert_eq!(held, vec![1, 3]);
}

#[tokio::test]
async fn test_adding_same_like_twice_is_a_noop() {
    let (_db, repos) = seeded_db().await;

    repos.users.add_like(1, 1).await.unwrap();
    repos.users.add_like(1, 1).await.unwrap();
    repos.likes.add_user(1, 1).await.unwrap();

    assert_eq!(repos.users.get_likes(1).await.unwrap().len(), 1);
    assert_eq!(repos.likes.get_users(1).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_remove_like_from_either_side() {
    let (_db, repos) = seeded_db().await;
    repos.users.add_like(1, 1).await.unwrap();
    repos.users.add_like(1, 2).await.unwrap();

    repos.users.remove_like(1, 1).await.unwrap();
    repos.likes.remove_user(2, 1).await.unwrap();
    // Removing a link that does not exist is fine.
    repos.likes.remove_user(3, 1).await.unwrap();

    assert!(repos.users.get_likes(1).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_records_are_reported() {
    let (_db, repos) = seeded_db().await;

    assert!(repos.users.find_by_id(99).await.unwrap().is_none());

    let err = repos.users.add_like(1, 99).await.unwrap_err();
    assert!(matches!(
        err,
        RepoError::MissingReference { entity: EntityKind::Like, id: 99 }
    ));

    let err = repos.users.get_posts(99).await.unwrap_err();
    assert!(matches!(
        err,
        RepoError::MissingReference { entity: EntityKind::User, id: 99 }
    ));

    let err = repos.comments.set_post(1, 42).await.unwrap_err();
    assert!(matches!(
        err,
        RepoError::MissingReference { entity: EntityKind::Post, id: 42 }
    ));

    let err = repos.users.set_profile(1, 7).await.unwrap_err();
    assert!(matches!(
        err,
        RepoError::MissingReference { entity: EntityKind::Profile, id: 7 }
    ));
    assert!(repos.users.get_profile(1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_invalid_seed_batch_inserts_nothing() {
    let (_db, repos) = empty_db().await;

    let err = repos
        .users
        .bulk_create(vec![
            NewUser::new("john_doe", "john_doe@example.com"),
            NewUser::new("broken", "no-at-sign"),
        ])
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::Validation(_)));
    assert!(repos.users.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_draft_is_rejected() {
    let (_db, repos) = empty_db().await;

    let mut like = NewLike::new("👍");
    like.created_at = Some("yesterday".to_string());

    let err = repos.likes.create(like).await.unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn test_find_by_email() {
    let (_db, repos) = seeded_db().await;

    let user = repos
        .users
        .find_by_email("jane_doe@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.id, 2);
    assert!(repos.users.find_by_email("nobody@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_and_delete() {
    let (_db, repos) = seeded_db().await;

    let mut post = repos.posts.find_by_id(3).await.unwrap().unwrap();
    post.title = "My Favourite Recipes".to_string();
    let updated = repos.posts.update(post).await.unwrap();
    assert_eq!(
        repos.posts.find_by_id(3).await.unwrap().unwrap().title,
        updated.title
    );

    repos.users.add_like(1, 2).await.unwrap();
    repos.likes.delete(2).await.unwrap();
    assert!(repos.likes.find_by_id(2).await.unwrap().is_none());
    assert!(repos.users.get_likes(1).await.unwrap().is_empty());

    assert!(matches!(repos.likes.delete(2).await, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_update_leaves_profile_link_alone() {
    let (_db, repos) = seeded_db().await;
    repos.users.set_profile(1, 1).await.unwrap();

    let mut other = repos.profiles.find_by_id(2).await.unwrap().unwrap();
    other.user_id = Some(1);
    other.bio = "Weekend baker".to_string();
    let updated = repos.profiles.update(other).await.unwrap();

    assert_eq!(updated.bio, "Weekend baker");
    assert_eq!(updated.user_id, None);
    assert_eq!(repos.users.get_profile(1).await.unwrap().unwrap().id, 1);

    let linked: Vec<i32> = repos
        .profiles
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .filter(|p| p.user_id == Some(1))
        .map(|p| p.id)
        .collect();
    assert_eq!(linked, vec![1]);
}

#[tokio::test]
async fn test_update_keeps_post_owner() {
    let (_db, repos) = seeded_db().await;
    repos.posts.set_user(1, 2).await.unwrap();

    let mut post = repos.posts.find_by_id(1).await.unwrap().unwrap();
    post.user_id = Some(99);
    post.title = "Hiking in Yosemite, Part 1".to_string();
    let updated = repos.posts.update(post).await.unwrap();

    assert_eq!(updated.title, "Hiking in Yosemite, Part 1");
    assert_eq!(updated.user_id, Some(2));
    assert_eq!(repos.users.get_posts(2).await.unwrap(), vec![updated]);
}

#[tokio::test]
async fn test_invalid_update_is_rejected() {
    let (_db, repos) = seeded_db().await;

    let mut user = repos.users.find_by_id(1).await.unwrap().unwrap();
    user.username = String::new();
    user.email = "no-at".to_string();
    let err = repos.users.update(user).await.unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let stored = repos.users.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.username, "john_doe");
    assert_eq!(stored.email, "john_doe@example.com");
}

#[tokio::test]
async fn test_alter_sync_keeps_data() {
    let (db, repos) = seeded_db().await;

    db.sync(SyncMode::Alter).await.unwrap();
    assert_eq!(repos.users.find_all().await.unwrap().len(), 3);

    db.sync(SyncMode::Force).await.unwrap();
    assert!(repos.users.find_all().await.unwrap().is_empty());
}
