//! # Observer
//!
//! A [`Channel`] is the subject: it keeps a list of subscribers and pushes a
//! message to every one of them when a video is uploaded. Subscribers are
//! held as `Rc<dyn Subscriber>` so the same user can follow several channels;
//! [`YoutubeUser`] records what it receives behind a `RefCell` so tests can
//! inspect delivery without any printing.

use std::cell::RefCell;
use std::rc::Rc;

pub trait Subscriber {
    /// Stable identity used for unsubscription.
    fn id(&self) -> &str;
    fn notify(&self, message: &str);
}

pub struct Channel {
    name: String,
    subscribers: Vec<Rc<dyn Subscriber>>,
    videos: Vec<String>,
}

impl Channel {
    pub fn new(name: impl Into<String>) -> Self {
        Channel {
            name: name.into(),
            subscribers: Vec::new(),
            videos: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, subscriber: Rc<dyn Subscriber>) {
        self.subscribers.push(subscriber);
    }

    /// Removing an id nobody holds is a no-op.
    pub fn unsubscribe(&mut self, id: &str) {
        self.subscribers.retain(|s| s.id() != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Records the video and notifies every current subscriber, in
    /// subscription order.
    pub fn upload(&mut self, video: impl Into<String>) {
        let video = video.into();
        let message = format!("New on {}: {}", self.name, video);
        self.videos.push(video);
        for subscriber in &self.subscribers {
            subscriber.notify(&message);
        }
    }

    pub fn videos(&self) -> &[String] {
        &self.videos
    }
}

pub struct YoutubeUser {
    name: String,
    inbox: RefCell<Vec<String>>,
}

impl YoutubeUser {
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Rc::new(YoutubeUser {
            name: name.into(),
            inbox: RefCell::new(Vec::new()),
        })
    }

    pub fn received(&self) -> Vec<String> {
        self.inbox.borrow().clone()
    }
}

impl Subscriber for YoutubeUser {
    fn id(&self) -> &str {
        &self.name
    }

    fn notify(&self, message: &str) {
        self.inbox.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_notifies_every_subscriber() {
        let mut channel = Channel::new("PrasadTech");
        let vamsi = YoutubeUser::new("Vamsi");
        let krishna = YoutubeUser::new("Krishna");
        channel.subscribe(vamsi.clone());
        channel.subscribe(krishna.clone());

        channel.upload("Best mobiles under 10000");

        assert_eq!(
            vamsi.received(),
            vec!["New on PrasadTech: Best mobiles under 10000"]
        );
        assert_eq!(krishna.received(), vamsi.received());
        assert_eq!(channel.videos().len(), 1);
    }

    #[test]
    fn unsubscribed_users_stop_receiving() {
        let mut channel = Channel::new("PrasadTech");
        let vamsi = YoutubeUser::new("Vamsi");
        let krishna = YoutubeUser::new("Krishna");
        channel.subscribe(vamsi.clone());
        channel.subscribe(krishna.clone());

        channel.upload("Best mobiles under 10000");
        channel.unsubscribe("Krishna");
        channel.upload("Best laptop deals");

        assert_eq!(vamsi.received().len(), 2);
        assert_eq!(krishna.received().len(), 1);
        assert_eq!(channel.subscriber_count(), 1);
    }

    #[test]
    fn unsubscribing_an_unknown_id_is_a_noop() {
        let mut channel = Channel::new("PrasadTech");
        channel.subscribe(YoutubeUser::new("Vamsi"));

        channel.unsubscribe("Nobody");
        assert_eq!(channel.subscriber_count(), 1);
    }

    #[test]
    fn one_user_can_follow_two_channels() {
        let mut tech = Channel::new("PrasadTech");
        let mut reviews = Channel::new("BarbelReview");
        let user = YoutubeUser::new("Vamsi");
        tech.subscribe(user.clone());
        reviews.subscribe(user.clone());

        tech.upload("video a");
        reviews.upload("video b");

        assert_eq!(user.received().len(), 2);
    }
}
