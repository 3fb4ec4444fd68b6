//! In-memory content store.
//!
//! Owns the three editable collections (team members, events, blog posts)
//! plus the moderation queue for community-submitted posts. Seeded from
//! [`crate::fixtures`] at startup and mutated only by the admin console;
//! nothing is persisted across restarts. Reads hand out clones, writes take
//! the collection's write lock, and a failed operation never leaves partial
//! state behind.

use std::sync::{Arc, RwLock};

use chrono::Utc;
use uuid::Uuid;

use crate::common::StoreError;
use crate::fixtures::{self, DEFAULT_READ_TIME, PLACEHOLDER_AVATAR, PLACEHOLDER_IMAGE};
use crate::models::{
    is_blog_category, is_member_category, Author, BlogCreate, BlogPost, BlogUpdate,
    CommunityBlogDraft, EventCreate, EventItem, EventUpdate, MemberCreate, MemberUpdate,
    ModerationStatus, TeamMember,
};

struct Collections {
    members: RwLock<Vec<TeamMember>>,
    events: RwLock<Vec<EventItem>>,
    blogs: RwLock<Vec<BlogPost>>,
    pending: RwLock<Vec<BlogPost>>,
}

/// Cheaply cloneable handle; all clones share the same collections.
#[derive(Clone)]
pub struct ContentStore {
    inner: Arc<Collections>,
}

fn fresh_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

fn today_display() -> String {
    Utc::now().format("%B %-d, %Y").to_string()
}

fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Short teaser computed from the post body when none is supplied.
pub fn snippet_from(body: &str) -> String {
    let text = strip_tags(body);
    let text = text.trim();
    if text.is_empty() {
        return "Click to read more...".to_string();
    }
    let cut: String = text.chars().take(100).collect();
    if cut.chars().count() < text.chars().count() {
        format!("{}...", cut)
    } else {
        cut
    }
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl ContentStore {
    /// Store seeded with the static site fixtures.
    pub fn seeded() -> Self {
        Self::with_content(fixtures::team(), fixtures::events(), fixtures::blog_posts())
    }

    /// Empty store, for tests.
    pub fn empty() -> Self {
        Self::with_content(Vec::new(), Vec::new(), Vec::new())
    }

    pub fn with_content(
        members: Vec<TeamMember>,
        events: Vec<EventItem>,
        blogs: Vec<BlogPost>,
    ) -> Self {
        Self {
            inner: Arc::new(Collections {
                members: RwLock::new(members),
                events: RwLock::new(events),
                blogs: RwLock::new(blogs),
                pending: RwLock::new(Vec::new()),
            }),
        }
    }

    // --- team members ---

    pub fn members(&self) -> Vec<TeamMember> {
        self.inner.members.read().expect("store lock poisoned").clone()
    }

    pub fn create_member(&self, data: &MemberCreate) -> Result<TeamMember, StoreError> {
        if blank(&data.name) || blank(&data.role) {
            return Err(StoreError::Validation(
                "Name and Role are required".to_string(),
            ));
        }
        if !is_member_category(&data.category) {
            return Err(StoreError::UnknownCategory(data.category.clone()));
        }

        let member = TeamMember {
            id: fresh_id("m"),
            name: data.name.trim().to_string(),
            role: data.role.trim().to_string(),
            category: data.category.clone(),
            image: data
                .image
                .clone()
                .filter(|s| !blank(s))
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            linkedin: data
                .linkedin
                .clone()
                .filter(|s| !blank(s))
                .unwrap_or_else(|| "#".to_string()),
        };

        let mut members = self.inner.members.write().expect("store lock poisoned");
        members.push(member.clone());
        Ok(member)
    }

    /// Merges the payload over the member with this id. `Ok(None)` when the
    /// id is unknown; the collection is untouched in that case.
    pub fn update_member(
        &self,
        id: &str,
        data: &MemberUpdate,
    ) -> Result<Option<TeamMember>, StoreError> {
        if let Some(category) = &data.category {
            if !is_member_category(category) {
                return Err(StoreError::UnknownCategory(category.clone()));
            }
        }

        let mut members = self.inner.members.write().expect("store lock poisoned");
        let Some(member) = members.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };

        if let Some(name) = &data.name {
            member.name = name.clone();
        }
        if let Some(role) = &data.role {
            member.role = role.clone();
        }
        if let Some(category) = &data.category {
            member.category = category.clone();
        }
        if let Some(image) = &data.image {
            member.image = image.clone();
        }
        if let Some(linkedin) = &data.linkedin {
            member.linkedin = linkedin.clone();
        }
        Ok(Some(member.clone()))
    }

    pub fn delete_member(&self, id: &str) -> bool {
        let mut members = self.inner.members.write().expect("store lock poisoned");
        let before = members.len();
        members.retain(|m| m.id != id);
        members.len() != before
    }

    // --- events ---

    pub fn events(&self) -> Vec<EventItem> {
        self.inner.events.read().expect("store lock poisoned").clone()
    }

    /// New events are prepended so the latest shows first.
    pub fn create_event(&self, data: &EventCreate) -> Result<EventItem, StoreError> {
        if blank(&data.title) || blank(&data.description) {
            return Err(StoreError::Validation(
                "Title and Description are required".to_string(),
            ));
        }

        let event = EventItem {
            id: fresh_id("e"),
            title: data.title.trim().to_string(),
            description: data.description.trim().to_string(),
            image: data
                .image
                .clone()
                .filter(|s| !blank(s))
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            layout: data.layout.unwrap_or_default(),
        };

        let mut events = self.inner.events.write().expect("store lock poisoned");
        events.insert(0, event.clone());
        Ok(event)
    }

    pub fn update_event(
        &self,
        id: &str,
        data: &EventUpdate,
    ) -> Result<Option<EventItem>, StoreError> {
        let mut events = self.inner.events.write().expect("store lock poisoned");
        let Some(event) = events.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };

        if let Some(title) = &data.title {
            event.title = title.clone();
        }
        if let Some(description) = &data.description {
            event.description = description.clone();
        }
        if let Some(image) = &data.image {
            event.image = image.clone();
        }
        if let Some(layout) = data.layout {
            event.layout = layout;
        }
        Ok(Some(event.clone()))
    }

    pub fn delete_event(&self, id: &str) -> bool {
        let mut events = self.inner.events.write().expect("store lock poisoned");
        let before = events.len();
        events.retain(|e| e.id != id);
        events.len() != before
    }

    // --- blog posts ---

    pub fn blogs(&self) -> Vec<BlogPost> {
        self.inner.blogs.read().expect("store lock poisoned").clone()
    }

    pub fn blog(&self, id: &str) -> Option<BlogPost> {
        self.inner
            .blogs
            .read()
            .expect("store lock poisoned")
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }

    pub fn create_blog(&self, data: &BlogCreate) -> Result<BlogPost, StoreError> {
        if blank(&data.title) {
            return Err(StoreError::Validation("Title is required".to_string()));
        }
        let category = data
            .category
            .clone()
            .filter(|s| !blank(s))
            .unwrap_or_else(|| "ALL".to_string());
        if !is_blog_category(&category) {
            return Err(StoreError::UnknownCategory(category));
        }

        let body = data.body.clone().unwrap_or_default();
        let snippet = data
            .snippet
            .clone()
            .filter(|s| !blank(s))
            .unwrap_or_else(|| snippet_from(&body));

        let post = BlogPost {
            id: fresh_id("b"),
            title: data.title.trim().to_string(),
            category,
            date: today_display(),
            read_time: DEFAULT_READ_TIME.to_string(),
            snippet,
            image: data
                .image
                .clone()
                .filter(|s| !blank(s))
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            author: Author {
                name: data
                    .author_name
                    .clone()
                    .filter(|s| !blank(s))
                    .unwrap_or_else(|| "Admin".to_string()),
                role: "Contributor".to_string(),
                avatar: PLACEHOLDER_AVATAR.to_string(),
            },
            body,
            status: None,
            submitted_at: None,
        };

        let mut blogs = self.inner.blogs.write().expect("store lock poisoned");
        blogs.insert(0, post.clone());
        Ok(post)
    }

    pub fn update_blog(
        &self,
        id: &str,
        data: &BlogUpdate,
    ) -> Result<Option<BlogPost>, StoreError> {
        if let Some(category) = &data.category {
            if !is_blog_category(category) {
                return Err(StoreError::UnknownCategory(category.clone()));
            }
        }

        let mut blogs = self.inner.blogs.write().expect("store lock poisoned");
        let Some(post) = blogs.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };

        if let Some(title) = &data.title {
            post.title = title.clone();
        }
        if let Some(category) = &data.category {
            post.category = category.clone();
        }
        if let Some(author_name) = &data.author_name {
            post.author.name = author_name.clone();
        }
        if let Some(image) = &data.image {
            post.image = image.clone();
        }
        if let Some(body) = &data.body {
            post.body = body.clone();
            post.snippet = data
                .snippet
                .clone()
                .filter(|s| !blank(s))
                .unwrap_or_else(|| snippet_from(body));
        } else if let Some(snippet) = &data.snippet {
            post.snippet = snippet.clone();
        }
        Ok(Some(post.clone()))
    }

    pub fn delete_blog(&self, id: &str) -> bool {
        let mut blogs = self.inner.blogs.write().expect("store lock poisoned");
        let before = blogs.len();
        blogs.retain(|b| b.id != id);
        blogs.len() != before
    }

    // --- moderation queue ---

    pub fn pending_blogs(&self) -> Vec<BlogPost> {
        self.inner.pending.read().expect("store lock poisoned").clone()
    }

    /// Places a community submission in the moderation queue. It stays out
    /// of the published collection until approved.
    pub fn submit_blog(&self, draft: &CommunityBlogDraft) -> Result<BlogPost, StoreError> {
        if blank(&draft.title) || blank(&draft.body) {
            return Err(StoreError::Validation(
                "Title and Content are required".to_string(),
            ));
        }
        if blank(&draft.author_name) || blank(&draft.author_email) {
            return Err(StoreError::Validation(
                "Author name and email are required".to_string(),
            ));
        }
        if !is_blog_category(&draft.category) {
            return Err(StoreError::UnknownCategory(draft.category.clone()));
        }

        let post = BlogPost {
            id: fresh_id("p"),
            title: draft.title.trim().to_string(),
            category: draft.category.clone(),
            date: today_display(),
            read_time: DEFAULT_READ_TIME.to_string(),
            snippet: draft
                .snippet
                .clone()
                .filter(|s| !blank(s))
                .unwrap_or_else(|| snippet_from(&draft.body)),
            image: PLACEHOLDER_IMAGE.to_string(),
            author: Author {
                name: draft.author_name.trim().to_string(),
                role: "Community Writer".to_string(),
                avatar: PLACEHOLDER_AVATAR.to_string(),
            },
            body: draft.body.clone(),
            status: Some(ModerationStatus::Pending),
            submitted_at: Some(Utc::now()),
        };

        let mut pending = self.inner.pending.write().expect("store lock poisoned");
        pending.push(post.clone());
        Ok(post)
    }

    /// Moves a pending post into the published collection, clearing its
    /// pending status. Unknown ids leave both collections untouched.
    pub fn approve_blog(&self, id: &str) -> Result<BlogPost, StoreError> {
        let mut pending = self.inner.pending.write().expect("store lock poisoned");
        let Some(pos) = pending.iter().position(|b| b.id == id) else {
            return Err(StoreError::NotFound(id.to_string()));
        };

        let mut post = pending.remove(pos);
        post.status = Some(ModerationStatus::Approved);

        let mut blogs = self.inner.blogs.write().expect("store lock poisoned");
        blogs.push(post.clone());
        Ok(post)
    }

    /// Discards a pending post without publishing it.
    pub fn reject_blog(&self, id: &str) -> bool {
        let mut pending = self.inner.pending.write().expect("store lock poisoned");
        let before = pending.len();
        pending.retain(|b| b.id != id);
        pending.len() != before
    }
}
