//! Shared fixtures for the NeuroTriage integration tests.

/// A case-list response as the backend actually serializes it, covering
/// every prediction vintage: legacy composite string, bare label plus
/// numeric column, numeric confidence only, and no prediction at all.
/// Extra fields the client never reads are included on purpose.
pub fn case_export() -> &'static str {
    r#"[
        {
            "id": "6f9619ff-8b86-d011-b42d-00c04fc964ff",
            "patient_id": "p-1",
            "patient_name": "Jean Dupont",
            "status": "pending",
            "description": "Tremblements au repos depuis 6 mois",
            "cnn_prediction": "Malade:0.9559",
            "cnn_prediction_num": null,
            "cnn_confidence": null,
            "neurologist_report": null,
            "report_pdf": null,
            "images_count": 3,
            "created_at": "2025-03-14T09:26:53",
            "updated_at": "2025-03-14T09:26:53"
        },
        {
            "id": "11111111-2222-3333-4444-555566667777",
            "patient_id": "p-2",
            "patient_name": "Marie Curie",
            "status": "analyzed",
            "cnn_prediction": "Sain",
            "cnn_prediction_num": 0.12,
            "cnn_confidence": null,
            "images_count": 1,
            "created_at": "2025-03-13T16:05:00"
        },
        {
            "id": "aaaaaaaa-bbbb-cccc-dddd-eeeeffff0000",
            "patient_id": "p-3",
            "patient_name": "Louis Pasteur",
            "status": "pending",
            "cnn_prediction": null,
            "cnn_confidence": 0.66,
            "images_count": 2,
            "created_at": "2025-03-14T08:00:00"
        },
        {
            "id": "99999999-8888-7777-6666-555544443333",
            "patient_id": "p-4",
            "patient_name": "Ada Lovelace",
            "status": "completed",
            "cnn_prediction": null,
            "images_count": 0,
            "created_at": "2025-03-10T11:30:00"
        }
    ]"#
}
