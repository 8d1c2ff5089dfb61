use std::time::Duration;

use anyhow::Context;
use rdkafka::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::util::Timeout;

use crate::config::EmployeesConfig;
use crate::domain::repository::ProfileEventPublisher;
use crate::domain::types::ProfileUpdateMessage;
use crate::error::EmployeesServiceError;

const SEND_TIMEOUT: Duration = Duration::from_secs(5);

/// Kafka producer for profile-update notifications.
///
/// Without bootstrap servers the publisher is disabled and drops messages.
#[derive(Clone)]
pub struct KafkaProfileEventPublisher {
    producer: Option<FutureProducer>,
    topic: String,
}

impl KafkaProfileEventPublisher {
    pub fn connect(config: &EmployeesConfig) -> anyhow::Result<Self> {
        if config.kafka_servers.trim().is_empty() {
            tracing::info!("KAFKA_SERVERS is empty, profile notifications disabled");
            return Ok(Self::disabled(&config.kafka_profile_update_topic));
        }
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", &config.kafka_servers)
            .set("client.id", &config.kafka_group_id)
            .set("message.timeout.ms", "5000")
            .create()
            .context("failed to create kafka producer")?;
        Ok(Self {
            producer: Some(producer),
            topic: config.kafka_profile_update_topic.clone(),
        })
    }

    pub fn disabled(topic: &str) -> Self {
        Self {
            producer: None,
            topic: topic.to_owned(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.producer.is_some()
    }
}

impl ProfileEventPublisher for KafkaProfileEventPublisher {
    async fn publish_profile_update(
        &self,
        message: &ProfileUpdateMessage,
    ) -> Result<(), EmployeesServiceError> {
        let Some(producer) = &self.producer else {
            tracing::debug!(
                employee_id = %message.employee_id,
                "bus disabled, dropping profile update"
            );
            return Ok(());
        };
        let payload = serde_json::to_string(message).context("encode profile update")?;
        let record = FutureRecord::to(&self.topic)
            .key(&message.employee_id)
            .payload(&payload);
        producer
            .send(record, Timeout::After(SEND_TIMEOUT))
            .await
            .map_err(|(e, _)| anyhow::anyhow!("publish to {}: {e}", self.topic))?;
        tracing::info!(
            topic = %self.topic,
            employee_id = %message.employee_id,
            "profile update published"
        );
        Ok(())
    }
}
