//! Form bodies sent to the Sendy API

use std::collections::{BTreeMap, HashMap};
use typed_builder::TypedBuilder;
use url::form_urlencoded;

/// Ordered set of form fields.
///
/// Inserting a key that is already present replaces its value in place, new
/// keys are appended. Later sources therefore win when field sets are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
		let key = key.into();
		let value = value.into();
		match self.0.iter_mut().find(|(k, _)| *k == key) {
			Some((_, existing)) => *existing = value,
			None => self.0.push((key, value)),
		}
	}

	/// Insert only when the key is absent or its value is empty
	pub fn insert_if_empty<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
		let key = key.into();
		if self.get(&key).map_or(true, str::is_empty) {
			self.insert(key, value);
		}
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.0
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// `application/x-www-form-urlencoded` representation
	pub fn encode(&self) -> String {
		form_urlencoded::Serializer::new(String::new())
			.extend_pairs(self.0.iter())
			.finish()
	}
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for FormFields {
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		for (key, value) in iter {
			self.insert(key, value);
		}
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut fields = FormFields::new();
		fields.extend(iter);
		fields
	}
}

impl IntoIterator for FormFields {
	type Item = (String, String);
	type IntoIter = std::vec::IntoIter<(String, String)>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for FormFields {
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for FormFields {
	fn from(pairs: Vec<(K, V)>) -> Self {
		pairs.into_iter().collect()
	}
}

impl<K: Into<String>, V: Into<String>, S> From<HashMap<K, V, S>> for FormFields {
	fn from(map: HashMap<K, V, S>) -> Self {
		map.into_iter().collect()
	}
}

impl<K: Into<String>, V: Into<String>> From<BTreeMap<K, V>> for FormFields {
	fn from(map: BTreeMap<K, V>) -> Self {
		map.into_iter().collect()
	}
}

/// A subscriber as understood by the Sendy `subscribe` endpoint
#[derive(TypedBuilder, Debug, PartialEq, Default)]
pub struct Subscriber {
	/// Subscriber email address
	#[builder(setter(into))]
	pub email: String,

	/// Optional subscriber name
	#[builder(default, setter(into, strip_option))]
	pub name: Option<String>,

	/// Optional two letter country code
	#[builder(default, setter(into, strip_option))]
	pub country: Option<String>,

	/// Optional IP address of the subscriber
	#[builder(default, setter(into, strip_option))]
	pub ipaddress: Option<String>,

	/// Optional URL the subscriber signed up from
	#[builder(default, setter(into, strip_option))]
	pub referrer: Option<String>,

	/// Consent was given for GDPR purposes
	#[builder(default)]
	pub gdpr: bool,

	/// Skip the double opt-in email
	#[builder(default)]
	pub silent: bool,

	/// Honeypot field, must be left empty for a human sign-up
	#[builder(default, setter(into, strip_option))]
	pub hp: Option<String>,

	/// Custom fields defined on the list
	#[builder(default)]
	pub custom_fields: HashMap<String, String>,
}

impl From<Subscriber> for FormFields {
	fn from(subscriber: Subscriber) -> Self {
		let mut fields = FormFields::new();
		fields.insert("email", subscriber.email);
		if let Some(name) = subscriber.name {
			fields.insert("name", name);
		}
		if let Some(country) = subscriber.country {
			fields.insert("country", country);
		}
		if let Some(ipaddress) = subscriber.ipaddress {
			fields.insert("ipaddress", ipaddress);
		}
		if let Some(referrer) = subscriber.referrer {
			fields.insert("referrer", referrer);
		}
		if subscriber.gdpr {
			fields.insert("gdpr", "true");
		}
		if subscriber.silent {
			fields.insert("silent", "true");
		}
		if let Some(hp) = subscriber.hp {
			fields.insert("hp", hp);
		}
		fields.extend(subscriber.custom_fields);
		fields
	}
}
