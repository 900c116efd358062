// Test helpers for exercising the controller against the presenter contract.
