pub mod mock_extractor;
